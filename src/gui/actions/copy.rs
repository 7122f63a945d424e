// src/gui/actions/copy.rs
use eframe::egui;
use crate::{browser::export::sheet_to_delimited, csv::Delim, gui::app::App};

/// Every matching row (all pages) through the page's export columns, as
/// TSV so it pastes into a spreadsheet cell-per-column.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();

    let txt = {
        let Some(browser) = app.browser() else { return };
        let sheet = browser.export_sheet(&page.columns());
        if sheet.is_empty() {
            logd!("Copy: Clicked, but there's nothing to copy");
            None
        } else {
            logf!("Copy: page={:?}, rows={}", page.kind(), sheet.len());
            Some(sheet_to_delimited(&sheet, Delim::Tsv))
        }
    };

    match txt {
        Some(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        None => app.status("Nothing to copy"),
    }
}
