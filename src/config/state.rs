// src/config/state.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_DATA_DIR, DEFAULT_LEAGUE};
use super::options::ExportOptions;
use crate::store::Scope;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Scope picked in the top bar; pages take what they need from it.
    pub scope: Scope,

    /// Directory holding the exported league views.
    pub data_dir: PathBuf,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            scope: Scope::league(DEFAULT_LEAGUE),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub export: ExportOptions,
    pub gui: GuiState,
}
