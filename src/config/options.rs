// src/config/options.rs
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::csv::Delim;

/// Every browsable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Standings,
    Managers,
    ManagerCareer,
    Teams,
    DraftBoard,
    DraftHistory,
}

impl PageKind {
    /// Subdirectory of the export dir used by default for this page.
    pub fn out_subdir(self) -> &'static str {
        match self {
            PageKind::Standings => "standings",
            PageKind::Managers | PageKind::ManagerCareer => "managers",
            PageKind::Teams => "teams",
            PageKind::DraftBoard | PageKind::DraftHistory => "drafts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> Delim {
        match self { ExportFormat::Csv => Delim::Csv, ExportFormat::Tsv => Delim::Tsv }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    pub fn current_dir(&self) -> &Path { &self.out_path.dir }

    pub fn file_stem(&self) -> &OsStr { &self.out_path.file_stem }

    /// Parse GUI text into dir + stem. Ignores a pasted extension.
    pub fn set_path(&mut self, text: &str) {
        let norm = crate::file::normalize_separators(text.trim());
        let p = Path::new(&norm);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn set_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(kind.out_subdir())
    }

    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }

    pub fn delim(&self) -> Delim { self.format.delim() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
