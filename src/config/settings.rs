//! User settings for the expense tracker
//!
//! Manages display preferences and how unreadable stored data is handled.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// What to do when the stored expense list cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorruptDataPolicy {
    /// Surface a `CorruptData` error (default)
    #[default]
    Fail,
    /// Behave as if nothing was stored; the blob is kept until the next save
    TreatAsEmpty,
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Separator between groups of three digits
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Paychecks received per month; the monthly total is split across them
    #[serde(default = "default_paychecks_per_month")]
    pub paychecks_per_month: u32,

    /// Handling of an unreadable store
    #[serde(default)]
    pub corrupt_data_policy: CorruptDataPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_thousands_separator() -> String {
    " ".to_string()
}

fn default_paychecks_per_month() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            thousands_separator: default_thousands_separator(),
            paychecks_per_month: default_paychecks_per_month(),
            corrupt_data_policy: CorruptDataPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file())
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| ExpenseError::Config(format!("Failed to save settings: {}", e)))
    }
}
