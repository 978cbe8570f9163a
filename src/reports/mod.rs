//! Reports for the expense tracker
//!
//! Aggregates the expense list into normalized totals and period groups.

pub mod summary;

pub use summary::{ExpenseSummary, PeriodGroup, MONTHS_PER_YEAR};
