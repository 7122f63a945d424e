// src/pages/teams.rs
use crate::browser::{Column, FieldSpec, SortOrder::*};
use crate::config::consts::FINISH_SENTINEL;
use crate::config::options::PageKind;
use crate::stats;
use crate::store::{Scope, Source};

use super::{Page, stem};

/// Every team-season (year + manager) in the league.
pub struct TeamsPage;
pub static PAGE: TeamsPage = TeamsPage;

const ID: &str = "team_season_id";

impl Page for TeamsPage {
    fn kind(&self) -> PageKind { PageKind::Teams }
    fn title(&self) -> &'static str { "Teams" }
    fn source(&self) -> Source { Source::TeamSeasons }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            // Newest first.
            FieldSpec::number("year", "Year (newest)").desc().searchable().then_by(ID, Asc),
            FieldSpec::number("season_finish", "Finish (best)")
                .nulls_as(FINISH_SENTINEL)
                .then_by("points_scored", Desc)
                .then_by(ID, Asc),
            FieldSpec::number("points_scored", "Points scored (PF)").desc().then_by(ID, Asc),
            FieldSpec::number("points_against", "Points against (PA)").desc().then_by(ID, Asc),
            FieldSpec::number("avg_points_scored", "Avg points scored (per game)")
                .desc()
                .derived(stats::avg_points_scored)
                .then_by(ID, Asc),
            FieldSpec::number("avg_points_against", "Avg points against (per game)")
                .desc()
                .derived(stats::avg_points_against)
                .then_by(ID, Asc),
            FieldSpec::number("wins", "Wins").desc().then_by(ID, Asc),
            FieldSpec::text("manager", "Manager").searchable().unsortable(),
            FieldSpec::text("team_name", "Team").searchable().unsortable(),
            FieldSpec::number(ID, "Team season id").unsortable(),
        ]
    }

    fn default_sort(&self) -> &'static str { "year" }

    fn filter_fields(&self) -> &'static [&'static str] { &["manager"] }

    fn search_hint(&self) -> Option<&'static str> { Some("Search team, manager, or year...") }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::field("Year", "year"),
            Column::field("Manager", "manager"),
            Column::field("Team", "team_name"),
            Column::field("Finish", "season_finish"),
            Column::field("Wins", "wins"),
            Column::field("Losses", "losses"),
            Column::field("Points Scored", "points_scored"),
            Column::field("Points Against", "points_against"),
            Column::derived("Avg Points Scored", stats::avg_points_scored),
            Column::derived("Avg Points Against", stats::avg_points_against),
            Column::field("Team Season ID", ID),
        ]
    }

    fn display_columns(&self) -> Vec<Column> {
        vec![
            Column::field("Year", "year"),
            Column::field("Manager", "manager"),
            Column::field("Team", "team_name"),
            Column::field("Finish", "season_finish"),
            Column::derived("W-L", stats::record_wl),
            Column::field("PF", "points_scored"),
            Column::field("PA", "points_against"),
            Column::derived("Avg PF", stats::avg_points_scored),
            Column::derived("Avg PA", stats::avg_points_against),
        ]
    }

    fn export_stem(&self, scope: &Scope) -> String {
        stem("teams", scope, None)
    }
}
