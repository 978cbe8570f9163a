//! Recurring expense tracker
//!
//! This library records recurring expenses (daily, weekly, monthly or
//! yearly) and aggregates them into a normalized monthly total and a
//! projected yearly total.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, ids and periods
//! - `storage`: Key-value store, JSON persistence and schema validation
//! - `services`: Add, edit, delete and import as whole-list transitions
//! - `reports`: Period grouping and totals
//! - `audit`: Audit logging system
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::config::{paths::ExpensePaths, settings::Settings};
//! use expenses::models::{ExpenseInput, Period};
//! use expenses::services::ExpenseService;
//! use expenses::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! let service = ExpenseService::new(&storage);
//! service.add(ExpenseInput::new("Rent", 30000.0, Period::Monthly))?;
//! let summary = service.summary()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
