// src/gui/components/controls.rs
//
// Search box, filter dropdowns, sort picker and page-size picker. Every
// widget writes straight through to the current page's browser.

use eframe::egui;
use crate::{browser::Filter, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    ui.horizontal_wrapped(|ui| {
        if let Some(hint) = page.search_hint() {
            let mut text = s!(app.search_text());
            let r = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(hint)
                    .desired_width(260.0),
            );
            if r.changed() {
                app.set_search(text);
            }
        }

        let Some(browser) = app.browsers.get_mut(&page.kind()) else { return };

        for &field in page.filter_fields() {
            let label = browser.field(field).map(|f| f.label.clone()).unwrap_or_else(|| s!(field));
            let current = browser.filter_for(field);
            let choices = browser.distinct_values(field);
            let shown = match &current {
                Filter::All => s!("All"),
                Filter::Only(v) => v.to_string(),
            };

            let mut pick: Option<Filter> = None;
            ui.label(join!(&label, ":"));
            egui::ComboBox::from_id_salt(("filter", field))
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current == Filter::All, "All").clicked() {
                        pick = Some(Filter::All);
                    }
                    for v in choices {
                        let on = current == Filter::Only(v.clone());
                        if ui.selectable_label(on, v.to_string()).clicked() {
                            pick = Some(Filter::Only(v));
                        }
                    }
                });
            if let Some(f) = pick {
                logd!("UI: Filter {} → {:?}", field, f);
                browser.set_filter(field, f);
                app.selected = None;
            }
        }

        let sort_key = browser.state().sort_key.clone();
        let sorts: Vec<(String, String)> = browser
            .sortable_fields()
            .map(|f| (f.name.clone(), f.label.clone()))
            .collect();
        if sorts.len() > 1 {
            let shown = sorts
                .iter()
                .find(|(n, _)| *n == sort_key)
                .map(|(_, l)| l.clone())
                .unwrap_or_else(|| sort_key.clone());
            let mut pick: Option<String> = None;
            ui.label("Sort:");
            egui::ComboBox::from_id_salt("sort")
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    for (name, label) in &sorts {
                        if ui.selectable_label(*name == sort_key, label).clicked() {
                            pick = Some(name.clone());
                        }
                    }
                });
            if let Some(name) = pick {
                logd!("UI: Sort → {}", name);
                browser.set_sort(&name);
                app.selected = None;
            }
        }

        let sizes = page.page_sizes();
        if !sizes.is_empty() {
            let cur = browser.state().page_size;
            let mut pick = None;
            ui.label("Per page:");
            egui::ComboBox::from_id_salt("page_size")
                .selected_text(cur.to_string())
                .show_ui(ui, |ui| {
                    for &n in sizes {
                        if ui.selectable_label(n == cur, n.to_string()).clicked() {
                            pick = Some(n);
                        }
                    }
                });
            if let Some(n) = pick {
                browser.set_page_size(n);
                app.selected = None;
            }
        }
    });
}
