//! Export module for the expense tracker
//!
//! Provides export of the expense list in two formats:
//! - JSON: the stored list, byte-for-byte in its persisted shape
//! - CSV: one row per expense with its monthly equivalent (spreadsheet-compatible)

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, parse_export};
