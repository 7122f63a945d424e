// src/browser/mod.rs
//! Generic tabular browser: one FieldSpec-driven implementation shared by
//! every page (standings, careers, team seasons, draft boards).

pub mod export;
pub mod field;
pub mod table;
pub mod view;

pub use export::{Column, SheetRow};
pub use field::{FieldSpec, Nulls, SortOrder};
pub use table::TabularBrowser;
pub use view::{Filter, View, ViewState};
