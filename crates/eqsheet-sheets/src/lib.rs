//! eqsheet-sheets
//!
//! Spreadsheet decoding. Thin wrapper around calamine that turns one
//! named sheet into an [`InputTable`](eqsheet_core::models::table::InputTable).

pub mod error;
pub mod format;
pub mod workbook;
