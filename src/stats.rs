// src/stats.rs
//
// Small presentation-side computations the pages show next to their tables.
// All aggregation proper happens upstream; these only combine a handful of
// already-aggregated fields per record.

use crate::data::{Record, Value};

/* ---------------- per-record ---------------- */

pub fn games_played(r: &Record) -> f64 {
    (r.num_or_zero("wins") + r.num_or_zero("losses")).max(0.0)
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn per_game(r: &Record, field: &str) -> Value {
    let g = games_played(r);
    let avg = if g > 0.0 { r.num_or_zero(field) / g } else { 0.0 };
    Value::Num(round2(avg))
}

/// Points scored per game, 0 when no games were played.
pub fn avg_points_scored(r: &Record) -> Value { per_game(r, "points_scored") }

/// Points against per game, 0 when no games were played.
pub fn avg_points_against(r: &Record) -> Value { per_game(r, "points_against") }

pub fn point_diff(r: &Record) -> Value {
    Value::Num(round2(r.num_or_zero("points_scored") - r.num_or_zero("points_against")))
}

fn win_loss(r: &Record, wins: &str, losses: &str) -> Value {
    Value::from(format!("{}-{}", r.num_or_zero(wins), r.num_or_zero(losses)))
}

/// "W-L" regular record.
pub fn record_wl(r: &Record) -> Value { win_loss(r, "wins", "losses") }

pub fn postseason_wl(r: &Record) -> Value { win_loss(r, "post_season_wins", "post_season_losses") }

pub fn playoff_wl(r: &Record) -> Value { win_loss(r, "playoff_wins", "playoff_losses") }

pub fn consolation_wl(r: &Record) -> Value { win_loss(r, "consolation_wins", "consolation_losses") }

/// 1 → "1st", 2 → "2nd", 11 → "11th", 23 → "23rd".
pub fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Display form for a possibly missing finish.
pub fn finish_label(finish: Option<i64>) -> String {
    finish.map(ordinal).unwrap_or_else(|| s!("—"))
}

/// URL-style slug used to match manager names across views:
/// lower-case, whitespace runs → '-', anything but word chars and '-' dropped.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_ws = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !in_ws { out.push('-'); }
            in_ws = true;
            continue;
        }
        in_ws = false;
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/* ---------------- per-table ---------------- */

fn season_of(r: &Record) -> Option<i64> {
    r.int("season").or_else(|| r.int("year"))
}

/// Distinct seasons (`season` or `year`), newest first.
pub fn seasons(records: &[Record]) -> Vec<i64> {
    let mut out: Vec<i64> = records.iter().filter_map(season_of).collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out.dedup();
    out
}

/// Top three of a season's standings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Podium<'a> {
    pub champion: Option<&'a Record>,
    pub runner_up: Option<&'a Record>,
    pub third: Option<&'a Record>,
}

impl<'a> Podium<'a> {
    pub fn from_standings(records: &'a [Record]) -> Self {
        let place = move |n: i64| records.iter().find(|r| r.int("season_finish") == Some(n));
        Self { champion: place(1), runner_up: place(2), third: place(3) }
    }
}

/// Career totals over one manager's team-seasons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CareerTotals {
    pub seasons: usize,
    pub championships: usize,
    pub wins: f64,
    pub losses: f64,
    pub points_scored: f64,
    pub points_against: f64,
    /// Mean over seasons with a known finish.
    pub avg_finish: Option<f64>,
}

impl CareerTotals {
    pub fn from_team_seasons(records: &[Record]) -> Self {
        let finishes: Vec<f64> = records.iter().filter_map(|r| r.num("season_finish")).collect();
        let avg_finish = if finishes.is_empty() {
            None
        } else {
            Some(round2(finishes.iter().sum::<f64>() / finishes.len() as f64))
        };
        Self {
            seasons: records.len(),
            championships: records.iter().filter(|r| r.int("season_finish") == Some(1)).count(),
            wins: records.iter().map(|r| r.num_or_zero("wins")).sum(),
            losses: records.iter().map(|r| r.num_or_zero("losses")).sum(),
            points_scored: round2(records.iter().map(|r| r.num_or_zero("points_scored")).sum()),
            points_against: round2(records.iter().map(|r| r.num_or_zero("points_against")).sum()),
            avg_finish,
        }
    }

    pub fn record_label(&self) -> String {
        format!("{}-{}", Value::Num(self.wins), Value::Num(self.losses))
    }
}

/// (season, finish) points in ascending season order; missing finishes stay
/// gaps rather than zeros.
pub fn finish_by_year(records: &[Record]) -> Vec<(i64, Option<i64>)> {
    let mut out: Vec<(i64, Option<i64>)> = records
        .iter()
        .filter_map(|r| season_of(r).map(|y| (y, r.int("season_finish"))))
        .collect();
    out.sort_by_key(|(y, _)| *y);
    out
}

/// Label/value pairs for a single team-season detail card.
pub fn team_season_card(r: &Record) -> Vec<(&'static str, String)> {
    let dash = |v: &Value| if v.is_null() { s!("—") } else { v.to_string() };
    vec![
        ("Finish", dash(r.get("season_finish"))),
        ("Record", record_wl(r).to_string()),
        ("Point Diff", point_diff(r).to_string()),
        ("PF", dash(r.get("points_scored"))),
        ("PA", dash(r.get("points_against"))),
        ("Postseason", postseason_wl(r).to_string()),
        ("Regular Finish", dash(r.get("regular_season_finish"))),
        ("Playoffs", playoff_wl(r).to_string()),
        ("Consolation", consolation_wl(r).to_string()),
    ]
}
