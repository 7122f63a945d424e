// src/pages/managers.rs
use crate::browser::{Column, FieldSpec, SortOrder::*};
use crate::config::consts::FINISH_SENTINEL;
use crate::config::options::PageKind;
use crate::store::{Scope, Source};

use super::{Page, stem};

pub struct ManagersPage;
pub static PAGE: ManagersPage = ManagersPage;

/// Descending count field, ties settled by name.
fn count(name: &str, label: &str) -> FieldSpec {
    FieldSpec::number(name, label).desc().then_by("manager", Asc)
}

impl Page for ManagersPage {
    fn kind(&self) -> PageKind { PageKind::Managers }
    fn title(&self) -> &'static str { "Managers" }
    fn source(&self) -> Source { Source::ManagerSummary }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            count("championships", "Championships"),
            FieldSpec::number("avg_finish", "Avg finish (lower better)")
                .nulls_as(FINISH_SENTINEL)
                .then_by("manager", Asc),
            count("wins", "Wins"),
            count("points_scored", "Points scored"),
            count("playoff_appearances", "Playoff appearances"),
            FieldSpec::text("manager", "Name").searchable(),
        ]
    }

    fn default_sort(&self) -> &'static str { "championships" }

    fn search_hint(&self) -> Option<&'static str> { Some("Search managers...") }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::field("Name", "manager"),
            Column::field("Seasons", "seasons"),
            Column::field("Championships", "championships"),
            Column::field("Playoffs", "playoff_appearances"),
            Column::field("Consolation", "consolation_appearances"),
            Column::field("Wins", "wins"),
            Column::field("Losses", "losses"),
            Column::field("Avg W", "avg_wins"),
            Column::field("Avg L", "avg_losses"),
            Column::field("PF", "points_scored"),
            Column::field("PA", "points_against"),
            Column::field("Avg PF", "avg_points_scored"),
            Column::field("Avg PA", "avg_points_against"),
            Column::field("Avg Finish", "avg_finish"),
        ]
    }

    fn export_stem(&self, scope: &Scope) -> String {
        stem("managers", scope, None)
    }
}
