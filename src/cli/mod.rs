//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod import;
pub mod log;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};
pub use log::{handle_log_command, LogArgs};

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

/// Ask a yes/no question on stdout and read the answer from `input`
///
/// Anything other than `y` or `yes` (case-insensitive) is a no, including
/// end of input.
pub fn confirm<R: BufRead>(question: &str, input: &mut R) -> ExpenseResult<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
