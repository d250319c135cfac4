//! eqsheet-core
//!
//! Pure domain types and work-directory path conventions.
//! No spreadsheet, template or process dependency — this is the shared
//! vocabulary of the eqsheet system.

pub mod error;
pub mod models;
pub mod paths;
