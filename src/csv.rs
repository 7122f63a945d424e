// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Field separator for delimited text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row that had no final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

/// A cell is quoted iff it holds the separator, a double quote or a newline.
/// A bare carriage return is written as is.
pub fn needs_quotes(field: &str, delim: Delim) -> bool {
    field.contains(delim.sep()) || field.contains('"') || field.contains('\n')
}

/// Escape one cell for delimited output.
pub fn escape_cell(field: &str, delim: Delim) -> String {
    if needs_quotes(field, delim) {
        join!("\"", &field.replace('"', "\"\""), "\"")
    } else {
        s!(field)
    }
}

/// Write a single CSV/TSV row (terminated by '\n') to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", delim.sep())?; } else { first = false; }
        w.write_all(escape_cell(cell.as_ref(), delim).as_bytes())?;
    }
    writeln!(w)
}

/// Render a header row plus body rows into one string.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
