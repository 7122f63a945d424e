// src/gui/components/scope_bar.rs
//
// Data dir + league text fields, and the season / manager pickers for pages
// that need them.

use eframe::egui;
use crate::{gui::app::App, pages::ScopeNeed};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut apply_dir = false;
    let mut apply_league = false;
    let mut new_season = None;
    let mut new_manager = None;
    let mut reload = false;

    ui.horizontal(|ui| {
        ui.label("Data:");
        let r = ui.add(
            egui::TextEdit::singleline(&mut app.data_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0),
        );
        apply_dir = r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("League:");
        let r = ui.add(egui::TextEdit::singleline(&mut app.league_text).desired_width(140.0));
        apply_league = r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        match app.current_page().needs() {
            ScopeNeed::Season => {
                let cur = app.state.gui.scope.season;
                let text = cur.map(|s| s.to_string()).unwrap_or_else(|| s!("—"));
                egui::ComboBox::from_id_salt("season")
                    .selected_text(text)
                    .show_ui(ui, |ui| {
                        for &season in &app.seasons {
                            if ui.selectable_label(cur == Some(season), season.to_string()).clicked() {
                                new_season = Some(season);
                            }
                        }
                    });
            }
            ScopeNeed::Manager => {
                let cur = app.state.gui.scope.manager.clone().unwrap_or_default();
                egui::ComboBox::from_id_salt("manager")
                    .selected_text(if cur.is_empty() { "—" } else { cur.as_str() })
                    .show_ui(ui, |ui| {
                        for m in &app.managers {
                            if ui.selectable_label(*m == cur, m).clicked() {
                                new_manager = Some(m.clone());
                            }
                        }
                    });
            }
            ScopeNeed::League => {}
        }

        reload = ui.button("Reload").clicked();
    });

    if apply_dir {
        let text = app.data_dir_text.clone();
        app.set_data_dir(&text);
    }
    if apply_league {
        let text = app.league_text.clone();
        app.set_league(&text);
    }
    if let Some(season) = new_season {
        app.set_season(season);
    }
    if let Some(manager) = new_manager {
        app.set_manager(&manager);
    }
    if reload {
        app.reload();
    }
}
