// src/gui/components/tabs.rs
//
// Renders the top tabs. The switch itself (export dir migration, scope
// pickers, lazy fetch) lives in App::switch_to.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        let mut picked = None;

        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                picked = Some(idx);
            }
        }

        if let Some(idx) = picked {
            app.switch_to(idx);
        }
    });
}
