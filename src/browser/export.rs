// src/browser/export.rs
//
// Caller-supplied column definitions and the two export shapes:
// - delimited text (header line of labels, one escaped line per record)
// - sheet rows (ordered label → value pairs) for a spreadsheet writer
//
// Nulls render as empty cells in both.

use crate::csv::{self, Delim};
use crate::data::{Record, Value};

#[derive(Clone, Copy, Debug)]
enum Source {
    Field(&'static str),
    Derived(fn(&Record) -> Value),
}

/// One output column: a human-readable label and where its cell comes from.
#[derive(Clone, Debug)]
pub struct Column {
    pub label: String,
    source: Source,
}

impl Column {
    /// Column reading a record field as-is.
    pub fn field(label: impl Into<String>, name: &'static str) -> Self {
        Self { label: label.into(), source: Source::Field(name) }
    }

    /// Column computed from the whole record.
    pub fn derived(label: impl Into<String>, f: fn(&Record) -> Value) -> Self {
        Self { label: label.into(), source: Source::Derived(f) }
    }

    pub fn value(&self, r: &Record) -> Value {
        match self.source {
            Source::Field(name) => r.get(name).clone(),
            Source::Derived(f) => f(r),
        }
    }

    pub fn cell(&self, r: &Record) -> String {
        self.value(r).to_string()
    }
}

pub fn labels(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.label.clone()).collect()
}

/// Render records through `columns` as delimited text.
pub fn to_delimited<'a, I>(columns: &[Column], records: I, delim: Delim) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let rows: Vec<Vec<String>> = records
        .into_iter()
        .map(|r| columns.iter().map(|c| c.cell(r)).collect())
        .collect();
    let headers = labels(columns);
    csv::rows_to_string(Some(headers.as_slice()), &rows, delim)
}

/// One spreadsheet row: named cells in column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetRow {
    pub cells: Vec<(String, Value)>,
}

impl SheetRow {
    pub fn build(columns: &[Column], r: &Record) -> Self {
        Self {
            cells: columns.iter().map(|c| (c.label.clone(), c.value(r))).collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.cells.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }
}

/// Flatten sheet rows back to delimited text (labels from the first row).
/// Used for clipboard copies that paste straight into a spreadsheet.
pub fn sheet_to_delimited(rows: &[SheetRow], delim: Delim) -> String {
    let Some(first) = rows.first() else {
        return s!();
    };
    let headers: Vec<String> = first.cells.iter().map(|(l, _)| l.clone()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells.iter().map(|(_, v)| v.to_string()).collect())
        .collect();
    csv::rows_to_string(Some(headers.as_slice()), &body, delim)
}
