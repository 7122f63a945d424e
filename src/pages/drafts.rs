// src/pages/drafts.rs
//
// Draft boards. One season's board and the all-seasons history share a
// field table; the history additionally searches/sorts by season and pages
// its (much longer) list.

use crate::browser::{Column, FieldSpec, SortOrder::*};
use crate::config::consts::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::config::options::PageKind;
use crate::store::{Scope, Source};

use super::{Page, ScopeNeed, stem};

pub struct DraftPage {
    all_seasons: bool,
}

pub static BOARD: DraftPage = DraftPage { all_seasons: false };
pub static HISTORY: DraftPage = DraftPage { all_seasons: true };

/// Text sort key: alphabetical, then draft order.
fn text(name: &str, label: &str) -> FieldSpec {
    FieldSpec::text(name, label)
        .searchable()
        .then_by("season", Asc)
        .then_by("pick", Asc)
}

pub fn draft_fields(all_seasons: bool) -> Vec<FieldSpec> {
    let mut season = FieldSpec::number("season", "Season").then_by("pick", Asc);
    if all_seasons {
        season = season.searchable();
    }
    vec![
        season,
        FieldSpec::number("pick", "Overall pick").searchable().then_by("season", Asc),
        FieldSpec::number("round", "Round")
            .searchable()
            .then_by("pick", Asc)
            .then_by("season", Asc),
        FieldSpec::number("pick_in_round", "Pick in round").nulls_last().unsortable(),
        text("manager", "Manager"),
        text("team", "Team"),
        text("position", "Position"),
        text("player", "Player"),
        FieldSpec::text("player_id", "Player id").unsortable(),
    ]
}

impl Page for DraftPage {
    fn kind(&self) -> PageKind {
        if self.all_seasons { PageKind::DraftHistory } else { PageKind::DraftBoard }
    }

    fn title(&self) -> &'static str {
        if self.all_seasons { "All Drafts" } else { "Draft Board" }
    }

    fn source(&self) -> Source { Source::DraftPicks }

    fn needs(&self) -> ScopeNeed {
        if self.all_seasons { ScopeNeed::League } else { ScopeNeed::Season }
    }

    fn fields(&self) -> Vec<FieldSpec> { draft_fields(self.all_seasons) }

    fn default_sort(&self) -> &'static str {
        if self.all_seasons { "season" } else { "pick" }
    }

    fn page_size(&self) -> usize {
        if self.all_seasons { DEFAULT_PAGE_SIZE } else { crate::config::consts::UNPAGED }
    }

    fn page_sizes(&self) -> &'static [usize] {
        if self.all_seasons { PAGE_SIZES } else { &[] }
    }

    fn filter_fields(&self) -> &'static [&'static str] { &["position", "manager"] }

    fn search_hint(&self) -> Option<&'static str> {
        Some(if self.all_seasons {
            "Search season, player, manager, team, position..."
        } else {
            "Search player, manager, team, position..."
        })
    }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::field("Season", "season"),
            Column::field("Overall Pick", "pick"),
            Column::field("Round", "round"),
            Column::field("Pick In Round", "pick_in_round"),
            Column::field("Manager", "manager"),
            Column::field("Team", "team"),
            Column::field("Player", "player"),
            Column::field("Position", "position"),
            Column::field("Player ID", "player_id"),
        ]
    }

    fn display_columns(&self) -> Vec<Column> {
        vec![
            Column::field("Season", "season"),
            Column::field("Pick", "pick"),
            Column::field("Rnd", "round"),
            Column::field("Manager", "manager"),
            Column::field("Team", "team"),
            Column::field("Player", "player"),
            Column::field("Pos", "position"),
        ]
    }

    fn export_stem(&self, scope: &Scope) -> String {
        if self.all_seasons {
            stem("draft_all", scope, None)
        } else {
            stem("draft", scope, scope.season.map(|s| s.to_string()))
        }
    }
}
