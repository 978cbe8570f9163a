//! CLI command for importing an expense list
//!
//! Import replaces every stored expense, so it asks before applying unless
//! `--yes` is given.

use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_import_preview, AmountFormat};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::confirm;

/// Arguments for `import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file previously written by `export`
    pub file: PathBuf,

    /// Replace the current list without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    args: ImportArgs,
) -> ExpenseResult<()> {
    let raw = std::fs::read_to_string(&args.file).map_err(|e| {
        ExpenseError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let service = ExpenseService::new(storage);
    let pending = service.prepare_import(&raw)?;

    print!(
        "{}",
        format_import_preview(&pending, &AmountFormat::from_settings(settings))
    );

    if !args.yes && !confirm("Continue?", &mut std::io::stdin().lock())? {
        println!("Import cancelled.");
        return Ok(());
    }

    let summary = service.apply_import(pending)?;
    println!(
        "Imported {} expenses ({} replaced).",
        summary.imported, summary.replaced
    );

    Ok(())
}
