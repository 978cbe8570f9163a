//! CSV export
//!
//! One row per expense, in stored order, with the normalized monthly amount
//! as an extra column.

use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;
use crate::storage::Storage;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: &'a str,
    title: &'a str,
    amount: f64,
    period: &'static str,
    monthly_equivalent: String,
}

impl<'a> From<&'a ExpenseRecord> for ExpenseRow<'a> {
    fn from(record: &'a ExpenseRecord) -> Self {
        Self {
            id: record.id.as_str(),
            title: &record.title,
            amount: record.amount,
            period: record.period.as_str(),
            monthly_equivalent: format!("{:.2}", record.monthly_equivalent()),
        }
    }
}

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<usize> {
    let records = storage.expenses.load()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    if records.is_empty() {
        csv_writer
            .write_record(["id", "title", "amount", "period", "monthly_equivalent"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for record in &records {
        csv_writer
            .serialize(ExpenseRow::from(record))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(records.len())
}
