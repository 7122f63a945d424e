// src/pages/standings.rs
use crate::browser::{Column, FieldSpec, SortOrder::*};
use crate::config::consts::FINISH_SENTINEL;
use crate::config::options::PageKind;
use crate::stats;
use crate::store::{Scope, Source};

use super::{Page, ScopeNeed, stem};

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

impl Page for StandingsPage {
    fn kind(&self) -> PageKind { PageKind::Standings }
    fn title(&self) -> &'static str { "Standings" }
    fn source(&self) -> Source { Source::SeasonStandings }
    fn needs(&self) -> ScopeNeed { ScopeNeed::Season }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("season_finish", "Finish")
                .nulls_as(FINISH_SENTINEL)
                .then_by("points_scored", Desc)
                .then_by("manager", Asc),
            FieldSpec::number("regular_season_finish", "Regular finish")
                .nulls_as(FINISH_SENTINEL)
                .then_by("season_finish", Asc)
                .then_by("manager", Asc),
            FieldSpec::number("points_scored", "Points scored").desc().then_by("manager", Asc),
            FieldSpec::number("points_against", "Points against").desc().then_by("manager", Asc),
            FieldSpec::number("point_diff", "Point diff")
                .desc()
                .derived(stats::point_diff)
                .then_by("manager", Asc),
            FieldSpec::number("wins", "Wins").desc().then_by("points_scored", Desc).then_by("manager", Asc),
            FieldSpec::text("manager", "Manager").searchable(),
            FieldSpec::text("team_name", "Team").searchable().then_by("manager", Asc),
        ]
    }

    fn default_sort(&self) -> &'static str { "season_finish" }

    fn search_hint(&self) -> Option<&'static str> { Some("Search manager or team...") }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::field("Finish", "season_finish"),
            Column::field("Manager", "manager"),
            Column::field("Team", "team_name"),
            Column::derived("W-L", stats::record_wl),
            Column::field("PF", "points_scored"),
            Column::field("PA", "points_against"),
            Column::derived("Diff", stats::point_diff),
            Column::field("Reg", "regular_season_finish"),
        ]
    }

    fn export_stem(&self, scope: &Scope) -> String {
        stem("standings", scope, scope.season.map(|s| s.to_string()))
    }
}
