// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.export.out_path().display());
        app.out_path_text = app.state.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    let page = app.current_page();

    let status_msg = {
        let Some(browser) = app.browser() else { return };
        let total = browser.matching().len();

        if total == 0 {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        } else {
            logf!("Export: Begin page={:?}, rows={}, format={:?}", page.kind(), total, app.state.export.format);
            match file::export_browser(&app.state.export, browser, &page.columns()) {
                Ok(path) => {
                    logf!("Export: OK rows={} path={}", total, path.display());
                    format!("Exported {total} row(s) to {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the browser borrow is gone
    app.status(status_msg);
}
