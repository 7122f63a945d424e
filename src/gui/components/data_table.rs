// src/gui/components/data_table.rs
//
// Draws the current page of the current browser. Purely a view: cells come
// from the page's display columns; numbers are centered, text left-aligned.
// Clicking a row picks it for the summary panel. A fetch error is shown
// in place of the table.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::Value;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let columns = page.display_columns();
    let selected = app.selected;

    // Fetch errors replace the table, verbatim.
    if let Some(err) = app.errors.get(&page.kind()) {
        ui.add_space(12.0);
        ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), err);
        return;
    }

    let Some(browser) = app.browsers.get(&page.kind()) else { return };
    let view = browser.view();

    if view.is_empty() {
        ui.add_space(12.0);
        ui.label(if browser.records().is_empty() { "No data loaded" } else { "No matching rows" });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut clicked = None;
    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt(("table_hscroll", page.kind()))
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(("table", page.kind()))
                .striped(true)
                .sense(Sense::click())
                .min_scrolled_height(0.0);
            for (ci, _) in columns.iter().enumerate() {
                let w = if ci == 0 { 60.0 } else { 110.0 };
                table = table.column(TableColumn::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for col in &columns {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(&col.label).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.len(), |mut row| {
                        let pos = row.index();
                        let Some(rec) = view.get(pos) else { return };
                        row.set_selected(selected == Some(pos));

                        for col in &columns {
                            let v = col.value(rec);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let text = v.to_string();
                                if matches!(v, Value::Num(_)) {
                                    ui.centered_and_justified(|ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }

                        if row.response().clicked() {
                            clicked = Some(pos);
                        }
                    });
                });
        });

    if let Some(pos) = clicked {
        app.selected = if selected == Some(pos) { None } else { Some(pos) };
    }
}
