//! Storage layer for the expense tracker
//!
//! Provides the key-value store boundary, JSON file storage with atomic
//! writes, schema validation, and the audit hooks used by the services.

pub mod expenses;
pub mod file_io;
pub mod store;
pub mod validation;

pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use store::{FileStore, MemoryStore, Store};
pub use validation::{ValidationReport, Violation};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

/// Main storage coordinator: the expense repository plus the audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create file-backed storage under the given paths
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let store = FileStore::new(paths.data_dir());
        Ok(Self {
            expenses: ExpenseRepository::with_policy(Box::new(store), settings.corrupt_data_policy),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Create storage over an arbitrary store, auditing under the given paths
    pub fn with_store(paths: ExpensePaths, expenses: ExpenseRepository) -> Self {
        Self {
            audit: AuditLogger::new(paths.audit_log()),
            expenses,
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry to the audit log
    ///
    /// Called after the change is already saved, so a failed write is
    /// reported as a warning and never undoes or fails the change.
    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            eprintln!(
                "Warning: change saved but not recorded in {}: {}",
                self.paths.audit_log().display(),
                e
            );
        }
    }

    /// Record a created entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an updated entity, with a field diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.record(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record a wholesale replacement of the collection
    pub fn log_import<T: Serialize>(&self, before: &T, after: &T, summary: String) {
        self.record(AuditEntry::import(before, after, summary))
    }
}
