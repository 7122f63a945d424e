// src/gui/components/pager.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(browser) = app.browser() else { return };
    let view = browser.view();

    let mut goto = None;
    ui.horizontal(|ui| {
        if browser.state().is_paged() {
            let (cur, last) = (view.current_page, view.page_count);
            if ui.add_enabled(view.has_prev(), egui::Button::new("⏮ First")).clicked() { goto = Some(1); }
            if ui.add_enabled(view.has_prev(), egui::Button::new("◀ Prev")).clicked() { goto = Some(cur - 1); }
            ui.label(format!("Page {cur} of {last}"));
            if ui.add_enabled(view.has_next(), egui::Button::new("Next ▶")).clicked() { goto = Some(cur + 1); }
            if ui.add_enabled(view.has_next(), egui::Button::new("Last ⏭")).clicked() { goto = Some(last); }
            ui.separator();
        }
        ui.label(format!("Showing {} of {} row(s)", view.len(), view.total_count));
    });

    if let Some(n) = goto {
        logd!("UI: Page → {}", n);
        if let Some(b) = app.browser_mut() {
            b.set_page(n);
        }
        app.selected = None;
    }
}
