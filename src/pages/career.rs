// src/pages/career.rs
use crate::browser::{Column, FieldSpec, SortOrder::*};
use crate::config::consts::FINISH_SENTINEL;
use crate::config::options::PageKind;
use crate::stats;
use crate::store::{Scope, Source};

use super::{Page, ScopeNeed, stem};

/// One manager's team-seasons, oldest first.
pub struct CareerPage;
pub static PAGE: CareerPage = CareerPage;

impl Page for CareerPage {
    fn kind(&self) -> PageKind { PageKind::ManagerCareer }
    fn title(&self) -> &'static str { "Manager Career" }
    fn source(&self) -> Source { Source::TeamSeasons }
    fn needs(&self) -> ScopeNeed { ScopeNeed::Manager }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("year", "Year").searchable().then_by("team_name", Asc),
            FieldSpec::number("season_finish", "Finish")
                .nulls_as(FINISH_SENTINEL)
                .then_by("year", Asc),
            FieldSpec::number("wins", "Wins").desc().then_by("year", Asc),
            FieldSpec::number("points_scored", "Points scored").desc().then_by("year", Asc),
            FieldSpec::number("points_against", "Points against").desc().then_by("year", Asc),
            FieldSpec::text("team_name", "Team").searchable().then_by("year", Asc),
        ]
    }

    fn default_sort(&self) -> &'static str { "year" }

    fn search_hint(&self) -> Option<&'static str> { Some("Search team or year...") }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::field("Year", "year"),
            Column::field("Team", "team_name"),
            Column::field("Finish", "season_finish"),
            Column::derived("W-L", stats::record_wl),
            Column::field("PF", "points_scored"),
            Column::field("PA", "points_against"),
            Column::field("Reg", "regular_season_finish"),
            Column::derived("Post", stats::postseason_wl),
        ]
    }

    fn export_stem(&self, scope: &Scope) -> String {
        stem("career", scope, scope.manager.as_deref().map(stats::slugify))
    }
}
