// src/gui/components/summary.rs
//
// Right-hand panel: per-page summaries computed from the loaded records.
// - Standings: podium.
// - Manager career: totals + finish by year.
// - Teams: detail card for the clicked team-season.

use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind,
    data::Record,
    gui::app::App,
    stats::{self, CareerTotals, Podium},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let Some(browser) = app.browser() else { return };

    ui.heading(page.title());
    ui.separator();

    match page.kind() {
        PageKind::Standings => podium(ui, browser.records()),
        PageKind::ManagerCareer => career(ui, browser.records()),
        PageKind::Teams => {
            let view = browser.view();
            match app.selected.and_then(|pos| view.get(pos)) {
                Some(r) => team_card(ui, r),
                None => { ui.label("Click a team-season for details."); }
            }
        }
        _ => {
            ui.label(format!("{} record(s) loaded", browser.records().len()));
        }
    }
}

fn podium(ui: &mut egui::Ui, records: &[Record]) {
    let p = Podium::from_standings(records);
    for (label, r) in [("Champion", p.champion), ("Runner-up", p.runner_up), ("Third", p.third)] {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).strong());
            match r {
                Some(r) => ui.label(format!(
                    "{} ({})",
                    r.text("manager").unwrap_or("?"),
                    r.text("team_name").unwrap_or("")
                )),
                None => ui.label("—"),
            };
        });
    }
}

fn career(ui: &mut egui::Ui, records: &[Record]) {
    let t = CareerTotals::from_team_seasons(records);
    egui::Grid::new("career_totals").num_columns(2).show(ui, |ui| {
        ui.label("Seasons");       ui.label(t.seasons.to_string()); ui.end_row();
        ui.label("Championships"); ui.label(t.championships.to_string()); ui.end_row();
        ui.label("Record");        ui.label(t.record_label()); ui.end_row();
        ui.label("PF");            ui.label(t.points_scored.to_string()); ui.end_row();
        ui.label("PA");            ui.label(t.points_against.to_string()); ui.end_row();
        ui.label("Avg finish");
        ui.label(t.avg_finish.map(|f| f.to_string()).unwrap_or_else(|| s!("—")));
        ui.end_row();
    });

    ui.separator();
    ui.label(RichText::new("Finish by year").strong());
    for (year, finish) in stats::finish_by_year(records) {
        ui.label(format!("{year}: {}", stats::finish_label(finish)));
    }
}

fn team_card(ui: &mut egui::Ui, r: &Record) {
    ui.label(RichText::new(format!(
        "{} {}",
        r.get("year"),
        r.text("team_name").unwrap_or("")
    )).strong());
    ui.label(r.text("manager").unwrap_or(""));
    egui::Grid::new("team_card").num_columns(2).show(ui, |ui| {
        for (label, value) in stats::team_season_card(r) {
            ui.label(label);
            ui.label(value);
            ui.end_row();
        }
    });
}
