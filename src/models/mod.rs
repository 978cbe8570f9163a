//! Core data models for the expense tracker
//!
//! The only persisted entity is [`ExpenseRecord`]; everything else is derived
//! from a list of them.

pub mod expense;
pub mod ids;
pub mod period;

pub use expense::{ExpenseInput, ExpenseRecord, ExpenseValidationError};
pub use ids::ExpenseId;
pub use period::{Period, UnknownPeriod};
