//! Expense repository
//!
//! Loads and saves the whole expense list as one JSON blob in a [`Store`]
//! slot. There are no partial updates: every mutation rewrites the list.

use serde_json::Value;

use crate::config::settings::CorruptDataPolicy;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

use super::store::Store;
use super::validation::{self, ValidationReport};

/// Slot holding the expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Repository for expense persistence
pub struct ExpenseRepository {
    store: Box<dyn Store>,
    policy: CorruptDataPolicy,
}

impl ExpenseRepository {
    /// Create a repository that fails loudly on corrupt data
    pub fn new(store: Box<dyn Store>) -> Self {
        Self::with_policy(store, CorruptDataPolicy::Fail)
    }

    /// Create a repository with an explicit corrupt-data policy
    pub fn with_policy(store: Box<dyn Store>, policy: CorruptDataPolicy) -> Self {
        Self { store, policy }
    }

    /// Load the expense list
    ///
    /// A slot that was never written is an empty list. A slot holding
    /// anything other than a valid expense list is `CorruptData`, unless
    /// the policy is `TreatAsEmpty`, in which case the blob is left as is
    /// and an empty list is returned.
    pub fn load(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        let bytes = match self.store.get(EXPENSES_KEY)? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };

        match decode(&bytes) {
            Ok(records) => Ok(records),
            Err(err) => match self.policy {
                CorruptDataPolicy::Fail => Err(err),
                CorruptDataPolicy::TreatAsEmpty => Ok(Vec::new()),
            },
        }
    }

    /// Overwrite the stored list
    pub fn save(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        let bytes = encode(records)?;
        self.store.set(EXPENSES_KEY, &bytes)
    }

    /// Raw stored bytes, `None` if nothing was ever saved
    pub fn raw(&self) -> ExpenseResult<Option<Vec<u8>>> {
        self.store.get(EXPENSES_KEY)
    }

    /// Validate a candidate payload against the stored shape
    pub fn validate(candidate: &Value) -> Result<Vec<ExpenseRecord>, ValidationReport> {
        validation::validate(candidate)
    }
}

/// Serialize a list exactly as it is persisted and exported
pub fn encode(records: &[ExpenseRecord]) -> ExpenseResult<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))
}

fn decode(bytes: &[u8]) -> ExpenseResult<Vec<ExpenseRecord>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ExpenseError::CorruptData(format!("not valid JSON: {}", e)))?;
    validation::validate(&value).map_err(|report| ExpenseError::CorruptData(report.to_string()))
}
