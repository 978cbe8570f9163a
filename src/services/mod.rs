//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, whole-list mutations, and audit logging.

pub mod expense;

pub use expense::{ExpenseService, ImportSummary, PendingImport};
