// src/browser/view.rs
//
// ViewState: the UI-facing knobs (search, filters, sort, page).
// View:      zero-copy paged projection; holds indices into the record set,
//            the same way the table only ever points back at loaded rows.

use std::collections::BTreeMap;

use crate::config::consts::UNPAGED;
use crate::data::{Record, Value};

/// Per-field filter choice. `All` clears the filter.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    All,
    Only(Value),
}

impl Filter {
    /// Map a dropdown choice: the literal "ALL" clears, anything else selects.
    pub fn from_choice(choice: &str) -> Self {
        if choice == "ALL" { Filter::All } else { Filter::Only(Value::from(choice)) }
    }
}

impl From<Value> for Filter {
    fn from(v: Value) -> Self { Filter::Only(v) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Trimmed, lower-cased free-text query.
    pub search: String,
    /// Active per-field filters (field name → selected value).
    pub filters: BTreeMap<String, Value>,
    pub sort_key: String,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(sort_key: impl Into<String>) -> Self {
        Self {
            search: s!(),
            filters: BTreeMap::new(),
            sort_key: sort_key.into(),
            page: 1,
            page_size: UNPAGED,
        }
    }

    pub fn is_paged(&self) -> bool { self.page_size != UNPAGED }
}

/// Number of pages for `total` rows; never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, page_count]`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Half-open index range of `page` over `total` rows.
pub fn page_bounds(page: usize, total: usize, page_size: usize) -> (usize, usize) {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);
    (start, end)
}

/// Paged projection over the loaded records.
#[derive(Clone, Debug)]
pub struct View<'a> {
    /// Positions of this page's rows in the loaded record set, in display order.
    pub row_ix: Vec<usize>,
    /// Rows after filter + search (before paging).
    pub total_count: usize,
    pub page_count: usize,
    pub current_page: usize,
    records: &'a [Record],
}

impl<'a> View<'a> {
    pub(crate) fn new(
        records: &'a [Record],
        row_ix: Vec<usize>,
        total_count: usize,
        page_count: usize,
        current_page: usize,
    ) -> Self {
        Self { row_ix, total_count, page_count, current_page, records }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn rows(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.records;
        self.row_ix.iter().filter_map(move |&i| records.get(i))
    }

    pub fn get(&self, pos: usize) -> Option<&'a Record> {
        self.row_ix.get(pos).and_then(|&i| self.records.get(i))
    }

    pub fn has_prev(&self) -> bool { self.current_page > 1 }
    pub fn has_next(&self) -> bool { self.current_page < self.page_count }
}
