// src/pages/mod.rs
//! # Page catalog
//!
//! One `Page` per browsable table. A page owns no logic of its own beyond
//! declarations: which upstream view it reads, how much scope it needs, its
//! `FieldSpec` table (sort directions, null sentinels, tie-breaks, search
//! participation), which fields get filter dropdowns, and the columns it
//! shows and exports. Filtering, sorting, paging and export all run through
//! the one shared `TabularBrowser`.
//!
//! ## Conventions
//! - Every sort field ends its tie-break chain on a key that is unique within
//!   the page's scope (team_season_id, manager, season + pick), so the order
//!   never depends on how the provider happened to return rows.
//! - "Lower is better" placements (finishes) sort ascending with a 999 null
//!   sentinel; counts and points sort descending with nulls as 0.

use crate::browser::{Column, FieldSpec, TabularBrowser};
use crate::config::consts::UNPAGED;
use crate::config::options::PageKind;
use crate::file::sanitize_stem;
use crate::store::{Scope, Source};

pub mod career;
pub mod drafts;
pub mod managers;
pub mod standings;
pub mod teams;

/// How much of the scope a page needs before it can fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeNeed {
    League,
    Season,
    Manager,
}

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;
    fn source(&self) -> Source;
    fn needs(&self) -> ScopeNeed { ScopeNeed::League }

    fn fields(&self) -> Vec<FieldSpec>;
    fn default_sort(&self) -> &'static str;

    /// Rows per page; `UNPAGED` shows everything.
    fn page_size(&self) -> usize { UNPAGED }

    /// Page-size choices offered in the UI (empty = no pager).
    fn page_sizes(&self) -> &'static [usize] { &[] }

    /// Fields offered as exact-match filter dropdowns.
    fn filter_fields(&self) -> &'static [&'static str] { &[] }

    /// Search box placeholder; `None` hides the search box.
    fn search_hint(&self) -> Option<&'static str> { None }

    /// Columns written by Export/Copy.
    fn columns(&self) -> Vec<Column>;

    /// Columns drawn in the table. Defaults to the export columns.
    fn display_columns(&self) -> Vec<Column> { self.columns() }

    /// File stem (no extension) for this page's export.
    fn export_stem(&self, scope: &Scope) -> String;

    /// Narrow the picked scope to what this page fetches.
    fn scope_for(&self, picked: &Scope) -> Scope {
        let base = Scope::league(&picked.league);
        match self.needs() {
            ScopeNeed::League => base,
            ScopeNeed::Season => Scope { season: picked.season, ..base },
            ScopeNeed::Manager => Scope { manager: picked.manager.clone(), ..base },
        }
    }

    /// A fresh browser configured for this page.
    fn browser(&self) -> TabularBrowser {
        TabularBrowser::new(self.fields(), self.default_sort()).with_page_size(self.page_size())
    }
}

/// `<prefix>_<league>[_<suffix>]`, sanitized for the filesystem.
pub(crate) fn stem(prefix: &str, scope: &Scope, suffix: Option<String>) -> String {
    let mut raw = join!(prefix, "_", &scope.league);
    if let Some(sfx) = suffix {
        raw.push('_');
        raw.push_str(&sfx);
    }
    sanitize_stem(&raw, prefix)
}
