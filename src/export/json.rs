//! JSON export
//!
//! The export file has the same shape as the stored blob, so a file written
//! here can be imported back without changes.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;
use crate::storage::expenses::encode;
use crate::storage::validation::parse_payload;
use crate::storage::Storage;

/// Export the current expense list as pretty-printed JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<usize> {
    let records = storage.expenses.load()?;
    let bytes = encode(&records)?;

    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(records.len())
}

/// Read an exported file back, validating it the same way import does
pub fn parse_export(json_str: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
    parse_payload(json_str).map_err(ExpenseError::InvalidPayload)
}
