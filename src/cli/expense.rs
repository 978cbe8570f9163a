//! Expense CLI commands
//!
//! Implements CLI commands for adding, editing, deleting and listing
//! expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_summary, AmountFormat};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseInput, ExpenseRecord, Period};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::confirm;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a recurring expense
    Add {
        /// What the money is spent on
        title: String,
        /// Amount paid once per period
        amount: f64,
        /// How often it is paid (daily, weekly, monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        period: Period,
    },
    /// Change an expense; omitted fields keep their value
    Edit {
        /// Expense ID or ID prefix
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<f64>,
        /// New period
        #[arg(short, long)]
        period: Option<Period>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or ID prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show expenses grouped by period with monthly and yearly totals
    #[command(alias = "ls")]
    List,
    /// Show expense details
    Show {
        /// Expense ID or ID prefix
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let fmt = AmountFormat::from_settings(settings);

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            period,
        } => {
            let record = service.add(ExpenseInput::new(title, amount, period))?;
            println!(
                "Added expense: {} ({} {}) [{}]",
                record.title,
                fmt.format(record.amount),
                record.period,
                record.id.short()
            );
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            period,
        } => {
            let current = find_expense(&service, &id)?;
            let input = ExpenseInput::new(
                title.unwrap_or_else(|| current.title.clone()),
                amount.unwrap_or(current.amount),
                period.unwrap_or(current.period),
            );

            let updated = service
                .edit(&current.id, input)?
                .ok_or_else(|| ExpenseError::expense_not_found(current.id.as_str()))?;
            println!(
                "Updated expense: {} ({} {})",
                updated.title,
                fmt.format(updated.amount),
                updated.period
            );
        }

        ExpenseCommands::Delete { id, force } => {
            let record = find_expense(&service, &id)?;

            if !force {
                println!(
                    "About to delete expense: {} ({} {})",
                    record.title,
                    fmt.format(record.amount),
                    record.period
                );
                if !confirm("Delete this expense?", &mut std::io::stdin().lock())? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            match service.delete(&record.id)? {
                Some(deleted) => println!("Deleted expense: {}", deleted.title),
                None => println!("Expense was already removed."),
            }
        }

        ExpenseCommands::List => {
            let summary = service.summary()?;
            print!(
                "{}",
                format_summary(&summary, &fmt, settings.paychecks_per_month)
            );
        }

        ExpenseCommands::Show { id } => {
            let record = find_expense(&service, &id)?;
            print!("{}", format_expense_details(&record, &fmt));
        }
    }

    Ok(())
}

fn find_expense(service: &ExpenseService, id: &str) -> ExpenseResult<ExpenseRecord> {
    service
        .find(id)?
        .ok_or_else(|| ExpenseError::expense_not_found(id))
}
