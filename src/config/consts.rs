// src/config/consts.rs

// Data source
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LEAGUE: &str = "Congadanga";

// Local state
pub const LOG_FILE: &str = ".league/debug.log";

// Browser
pub const UNPAGED: usize = usize::MAX;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const PAGE_SIZES: &[usize] = &[50, 100, 200, 500];

// Missing finishes sort after every real placement.
pub const FINISH_SENTINEL: i64 = 999;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "export";
