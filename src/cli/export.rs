//! CLI command for data export

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json};
use crate::storage::file_io::write_atomic;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON, same shape as the stored list and accepted by import
    Json,
    /// CSV with a monthly equivalent column
    Csv,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

/// Handle the export command
///
/// The output file is replaced only once the whole export has been
/// produced, so a failed export leaves an existing file as it was.
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let mut buffer = Vec::new();
    let count = match args.format {
        ExportFormat::Json => export_json(storage, &mut buffer)?,
        ExportFormat::Csv => export_expenses_csv(storage, &mut buffer)?,
    };

    write_atomic(&args.output, &buffer).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to write {}: {}",
            args.output.display(),
            e
        ))
    })?;

    println!("Exported {} expenses to: {}", count, args.output.display());
    Ok(())
}
