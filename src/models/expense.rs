//! Expense model
//!
//! A recurring expense: something paid a fixed amount once per period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::period::Period;

/// A persisted recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, never changes after creation
    pub id: ExpenseId,

    /// What the money is spent on
    pub title: String,

    /// Amount paid once per period
    pub amount: f64,

    /// How often the amount is paid
    pub period: Period,
}

impl ExpenseRecord {
    /// Create a record with a fresh id from already validated input
    pub fn new(input: ExpenseInput) -> Self {
        Self {
            id: ExpenseId::new(),
            title: input.title,
            amount: input.amount,
            period: input.period,
        }
    }

    /// Overwrite the editable fields, keeping the id
    pub fn apply(&mut self, input: ExpenseInput) {
        self.title = input.title;
        self.amount = input.amount;
        self.period = input.period;
    }

    /// This expense expressed as a monthly amount
    pub fn monthly_equivalent(&self) -> f64 {
        self.amount * self.period.monthly_factor()
    }

    /// The editable fields of this record
    pub fn input(&self) -> ExpenseInput {
        ExpenseInput {
            title: self.title.clone(),
            amount: self.amount,
            period: self.period,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.as_str().is_empty() {
            return Err(ExpenseValidationError::EmptyId);
        }
        validate_fields(&self.title, self.amount)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.title, self.amount, self.period)
    }
}

/// The user-editable part of an expense: title, amount and period
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: f64,
    pub period: Period,
}

impl ExpenseInput {
    /// Build input from raw values, trimming the title
    pub fn new(title: impl AsRef<str>, amount: f64, period: Period) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            amount,
            period,
        }
    }

    /// Validate the triple, returning it on success
    pub fn validate(self) -> Result<Self, ExpenseValidationError> {
        validate_fields(&self.title, self.amount)?;
        Ok(self)
    }
}

fn validate_fields(title: &str, amount: f64) -> Result<(), ExpenseValidationError> {
    if title.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyTitle);
    }
    if !amount.is_finite() {
        return Err(ExpenseValidationError::NonFiniteAmount);
    }
    if amount <= 0.0 {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyId,
    EmptyTitle,
    NonFiniteAmount,
    NonPositiveAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Expense id cannot be empty"),
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
