use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expenses::cli::{
    handle_expense_command, handle_export_command, handle_import_command, handle_log_command,
    ExpenseCommands, ExportArgs, ImportArgs, LogArgs,
};
use expenses::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expenses::config::settings::Settings;
use expenses::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track recurring expenses and see what they cost per month and per year",
    long_about = "Records recurring expenses paid daily, weekly, monthly or yearly, \
                  normalizes them to a monthly total and projects that over a year."
)]
struct Cli {
    /// Base directory for data, settings and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Write the expense list to a file
    Export(ExportArgs),

    /// Replace the expense list with the contents of a JSON file
    Import(ImportArgs),

    /// Show recent changes from the audit log
    Log(LogArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&storage, &settings, args)?;
        }
        Some(Commands::Log(args)) => {
            handle_log_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Thousands separator: {:?}", settings.thousands_separator);
            println!("  Paychecks per month: {}", settings.paychecks_per_month);
            println!("  Corrupt data policy: {:?}", settings.corrupt_data_policy);
        }
        None => {
            println!("Expense Tracker - recurring expenses, normalized");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add Rent 30000' to record your first expense.");
        }
    }

    Ok(())
}
