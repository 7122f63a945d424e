// src/browser/table.rs
//! TabularBrowser: filter → search → sort → paginate over a loaded record set.
//!
//! The record set is replaced wholesale by `load()` and never mutated in
//! between; every derived view is a pure function of (records, ViewState).
//! Sorting always ends on load order, so equal keys keep a fixed relative
//! order for a given load.

use std::cmp::Ordering;

use crate::csv::Delim;
use crate::data::{Record, Value};

use super::export::{self, Column, SheetRow};
use super::field::{self, FieldSpec};
use super::view::{self, Filter, View, ViewState};

#[derive(Clone, Debug)]
pub struct TabularBrowser {
    records: Vec<Record>,
    fields: Vec<FieldSpec>,
    defaults: ViewState,
    state: ViewState,
}

impl TabularBrowser {
    /// A browser over `fields`, sorting on `default_sort` until told otherwise.
    pub fn new(fields: Vec<FieldSpec>, default_sort: &str) -> Self {
        let defaults = ViewState::new(default_sort);
        Self {
            records: Vec::new(),
            fields,
            state: defaults.clone(),
            defaults,
        }
    }

    /// Default page size applied on every load/reset.
    pub fn with_page_size(mut self, n: usize) -> Self {
        self.defaults.page_size = n.max(1);
        self.state.page_size = self.defaults.page_size;
        self
    }

    /* ---------- record set ---------- */

    /// Replace the full record set and reset the view to defaults.
    pub fn load(&mut self, records: Vec<Record>) {
        logd!("Browser: Load rows={} sort={}", records.len(), self.defaults.sort_key);
        self.records = records;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = self.defaults.clone();
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn fields(&self) -> &[FieldSpec] { &self.fields }
    pub fn state(&self) -> &ViewState { &self.state }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn sortable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.sortable)
    }

    /* ---------- view state ---------- */

    pub fn set_search(&mut self, query: &str) {
        self.state.search = query.trim().to_lowercase();
        self.state.page = 1;
    }

    pub fn set_filter(&mut self, field: &str, filter: impl Into<Filter>) {
        match filter.into() {
            Filter::All => { self.state.filters.remove(field); }
            Filter::Only(v) => { self.state.filters.insert(s!(field), v); }
        }
        self.state.page = 1;
    }

    pub fn filter_for(&self, field: &str) -> Filter {
        match self.state.filters.get(field) {
            Some(v) => Filter::Only(v.clone()),
            None => Filter::All,
        }
    }

    /// Switch the sort key. Direction comes from the field itself.
    /// Unknown or unsortable fields are ignored and `false` is returned.
    pub fn set_sort(&mut self, field: &str) -> bool {
        match self.field(field) {
            Some(f) if f.sortable => {
                self.state.sort_key = f.name.clone();
                true
            }
            _ => {
                logd!("Browser: Ignoring sort on unknown field {field:?}");
                false
            }
        }
    }

    pub fn set_page_size(&mut self, n: usize) {
        self.state.page_size = n.max(1);
        self.state.page = 1;
    }

    pub fn set_page(&mut self, n: usize) {
        let total = self.filtered_ix().len();
        self.state.page = view::clamp_page(n, total, self.state.page_size);
    }

    /* ---------- derivation ---------- */

    /// Indices of records passing every active filter and the search, in
    /// load order.
    fn filtered_ix(&self) -> Vec<usize> {
        let mut ix: Vec<usize> = (0..self.records.len()).collect();

        for (name, wanted) in &self.state.filters {
            ix.retain(|&i| self.value_of(name, &self.records[i]).same_as(wanted));
            if ix.is_empty() {
                return ix;
            }
        }

        let q = &self.state.search;
        if !q.is_empty() {
            ix.retain(|&i| self.matches_search(&self.records[i], q));
        }
        ix
    }

    fn value_of(&self, name: &str, r: &Record) -> Value {
        match self.field(name) {
            Some(f) => f.value(r).into_owned(),
            None => r.get(name).clone(),
        }
    }

    fn matches_search(&self, r: &Record, q: &str) -> bool {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .any(|f| f.value(r).search_text().contains(q))
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        let (ra, rb) = (&self.records[a], &self.records[b]);
        let Some(primary) = self.field(&self.state.sort_key) else {
            return a.cmp(&b);
        };

        let mut ord = primary.cmp(ra, rb);
        for tb in &primary.tie_breaks {
            if ord != Ordering::Equal {
                break;
            }
            ord = match self.field(&tb.field) {
                Some(f) => f.cmp_in(ra, rb, tb.order),
                None => field::cmp_raw(&tb.field, ra, rb, tb.order),
            };
        }
        ord.then_with(|| a.cmp(&b))
    }

    /// Every matching record index, sorted, ignoring pagination.
    pub fn matching(&self) -> Vec<usize> {
        let mut ix = self.filtered_ix();
        ix.sort_by(|&a, &b| self.compare(a, b));
        ix
    }

    /// Current page of the filtered, searched, sorted records.
    pub fn view(&self) -> View<'_> {
        let all = self.matching();
        let total = all.len();
        let size = self.state.page_size;
        let pages = view::page_count(total, size);
        let page = self.state.page.clamp(1, pages);
        let (start, end) = view::page_bounds(page, total, size);
        View::new(&self.records, all[start..end].to_vec(), total, pages, page)
    }

    /// Distinct non-empty values of a field across the full record set,
    /// sorted naturally. Feeds filter dropdowns.
    pub fn distinct_values(&self, field: &str) -> Vec<Value> {
        let mut out: Vec<Value> = Vec::new();
        for r in &self.records {
            let v = self.value_of(field, r);
            if v.is_null() || v.as_str().is_some_and(str::is_empty) {
                continue;
            }
            if !out.iter().any(|seen| seen == &v) {
                out.push(v);
            }
        }
        out.sort_by(|a, b| a.natural_cmp(b));
        out
    }

    /* ---------- export ---------- */

    /// Serialize every matching row (not just the current page) through
    /// `columns` into delimited text with a header line.
    pub fn export_delimited(&self, columns: &[Column], delim: Delim) -> String {
        let ix = self.matching();
        logf!("Browser: Export delimited rows={} cols={} delim={:?}", ix.len(), columns.len(), delim);
        export::to_delimited(columns, ix.iter().map(|&i| &self.records[i]), delim)
    }

    /// Same row set as `export_delimited`, as label → value rows for a
    /// spreadsheet writer.
    pub fn export_sheet(&self, columns: &[Column]) -> Vec<SheetRow> {
        let ix = self.matching();
        logf!("Browser: Export sheet rows={} cols={}", ix.len(), columns.len());
        ix.iter().map(|&i| SheetRow::build(columns, &self.records[i])).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::field::SortOrder;

    fn picks() -> TabularBrowser {
        let fields = vec![
            FieldSpec::number("season", "Season").searchable().then_by("pick", SortOrder::Asc),
            FieldSpec::number("pick", "Pick").searchable(),
            FieldSpec::text("manager", "Manager").searchable().then_by("pick", SortOrder::Asc),
        ];
        let mut b = TabularBrowser::new(fields, "pick");
        b.load(vec![
            record! { "season" => 2021, "pick" => 2, "manager" => "B" },
            record! { "season" => 2021, "pick" => 1, "manager" => "A" },
            record! { "season" => 2020, "pick" => 12, "manager" => "A" },
        ]);
        b
    }

    #[test]
    fn unknown_sort_is_ignored() {
        let mut b = picks();
        assert!(!b.set_sort("nope"));
        assert_eq!(b.state().sort_key, "pick");
    }

    #[test]
    fn tie_break_falls_through_to_secondary_key() {
        let mut b = picks();
        b.set_sort("manager");
        let picks: Vec<_> = b.view().rows().map(|r| r.int("pick")).collect();
        assert_eq!(picks, vec![Some(1), Some(12), Some(2)]);
    }

    #[test]
    fn filtering_unknown_field_yields_nothing_for_real_values() {
        let mut b = picks();
        b.set_filter("position", Filter::Only(Value::from("QB")));
        assert_eq!(b.view().total_count, 0);
        // Absent field equals the empty choice.
        b.set_filter("position", Filter::Only(Value::from("")));
        assert_eq!(b.view().total_count, 3);
    }

    #[test]
    fn distinct_values_sorted_and_deduped() {
        let b = picks();
        assert_eq!(b.distinct_values("manager"), vec![Value::from("A"), Value::from("B")]);
        assert_eq!(b.distinct_values("season"), vec![Value::from(2020), Value::from(2021)]);
    }
}
