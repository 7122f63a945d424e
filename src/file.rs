// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::browser::{Column, TabularBrowser};
use crate::config::options::ExportOptions;

/// Write already-serialized export text to `export.out_path()`, creating the
/// directory if needed. Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    contents: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes())?;
    out.flush()?;

    logf!("File: Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

/// Export every row the browser currently matches (all pages) through
/// `columns` in the format chosen by `export`.
pub fn export_browser(
    export: &ExportOptions,
    browser: &TabularBrowser,
    columns: &[Column],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let text = browser.export_delimited(columns, export.delim());
    write_export(export, &text)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Filesystem-safe stem: ASCII alphanumerics, `-` and `_`; whitespace runs
/// collapse to one `_`. Falls back to `fallback` when nothing survives.
pub fn sanitize_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;

    #[test]
    fn sanitize_collapses_and_falls_back() {
        assert_eq!(sanitize_stem("draft_Conga Danga_2021", "draft"), "draft_Conga_Danga_2021");
        assert_eq!(sanitize_stem("teams__A/B", "teams"), "teams_AB");
        assert_eq!(sanitize_stem("  ***  ", "export"), "export");
    }

    #[test]
    fn normalize_maps_both_slashes() {
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(normalize_separators("a/b\\c"), format!("a{sep}b{sep}c"));
    }

    #[test]
    fn write_export_creates_dir_and_uses_format_ext() {
        let root = std::env::temp_dir().join(format!("league_file_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);

        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Tsv;
        opts.set_path(&root.join("nested").join("picks.csv").to_string_lossy());

        let path = write_export(&opts, "A\tB\n1\t2\n").unwrap();
        assert_eq!(path, root.join("nested").join("picks.tsv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "A\tB\n1\t2\n");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let root = std::env::temp_dir().join(format!("league_file_f_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        let f = root.join("plain");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        let _ = fs::remove_dir_all(&root);
    }
}
