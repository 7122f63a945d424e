// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut do_copy = false;
    let mut do_export = false;

    ui.horizontal(|ui| {
        let export = &mut app.state.export;

        // --- Format ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        // --- Output field ---
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        // --- Actions ---
        do_copy = ui.button("Copy").on_hover_text("Copy all matching rows as a sheet (TSV)").clicked();
        do_export = ui.button("Export").clicked();

        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });

    if do_copy {
        actions::copy(app, ui.ctx());
    }
    if do_export {
        actions::export(app);
    }
}
