//! Expense service
//!
//! Business logic for the expense list. Every mutation reads the whole list,
//! changes it, writes it back, and then records an audit entry. A failed
//! validation leaves the stored list untouched. Once the list is written the
//! mutation has succeeded, whether or not the audit entry could be recorded.

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseInput, ExpenseRecord};
use crate::reports::ExpenseSummary;
use crate::storage::validation::parse_payload;
use crate::storage::Storage;

/// A validated import waiting for confirmation
///
/// Importing replaces the whole list. Callers inspect this value, ask the
/// user however they like, and pass it to [`ExpenseService::apply_import`].
#[derive(Debug, Clone)]
pub struct PendingImport {
    records: Vec<ExpenseRecord>,
    replaced: usize,
}

impl PendingImport {
    /// Records that will become the new list
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of incoming records
    pub fn incoming_count(&self) -> usize {
        self.records.len()
    }

    /// Number of currently stored records that will be discarded
    pub fn replaced_count(&self) -> usize {
        self.replaced
    }

    /// Whether applying this import loses existing data
    pub fn is_destructive(&self) -> bool {
        self.replaced > 0
    }
}

/// Outcome of an applied import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub replaced: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense with a fresh id
    pub fn add(&self, input: ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        let input = validate_input(input)?;

        let mut records = self.storage.expenses.load()?;
        let record = ExpenseRecord::new(input);
        records.push(record.clone());
        self.storage.expenses.save(&records)?;

        self.storage.log_create(
            EntityType::Expense,
            record.id.to_string(),
            Some(record.title.clone()),
            &record,
        );

        Ok(record)
    }

    /// Replace the title, amount and period of an expense
    ///
    /// Returns `Ok(None)` without touching the store if no expense has this
    /// id; it may have been removed in the meantime.
    pub fn edit(&self, id: &ExpenseId, input: ExpenseInput) -> ExpenseResult<Option<ExpenseRecord>> {
        let input = validate_input(input)?;

        let mut records = self.storage.expenses.load()?;
        let record = match records.iter_mut().find(|r| &r.id == id) {
            Some(record) => record,
            None => return Ok(None),
        };

        let before = record.clone();
        record.apply(input);
        let after = record.clone();

        self.storage.expenses.save(&records)?;

        self.storage.log_update(
            EntityType::Expense,
            after.id.to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        );

        Ok(Some(after))
    }

    /// Remove an expense
    ///
    /// Returns `Ok(None)` without touching the store if no expense has this
    /// id.
    pub fn delete(&self, id: &ExpenseId) -> ExpenseResult<Option<ExpenseRecord>> {
        let mut records = self.storage.expenses.load()?;
        let position = match records.iter().position(|r| &r.id == id) {
            Some(position) => position,
            None => return Ok(None),
        };

        let removed = records.remove(position);
        self.storage.expenses.save(&records)?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.title.clone()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Get an expense by exact id
    pub fn get(&self, id: &ExpenseId) -> ExpenseResult<Option<ExpenseRecord>> {
        Ok(self
            .storage
            .expenses
            .load()?
            .into_iter()
            .find(|r| &r.id == id))
    }

    /// Find an expense by full id or unique id prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<ExpenseRecord>> {
        let identifier = identifier.trim();
        let records = self.storage.expenses.load()?;

        if let Some(exact) = records.iter().find(|r| r.id.as_str() == identifier) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = records.into_iter().filter(|r| r.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Id prefix '{}' matches more than one expense",
                identifier
            ))),
        }
    }

    /// List all expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.storage.expenses.load()
    }

    /// Aggregate the stored expenses
    pub fn summary(&self) -> ExpenseResult<ExpenseSummary> {
        let records = self.storage.expenses.load()?;
        Ok(ExpenseSummary::generate(&records))
    }

    /// Validate an import payload without changing anything
    ///
    /// The stored list is read only to report how many records the import
    /// would discard. If it cannot be read, the import can still proceed and
    /// will overwrite it.
    pub fn prepare_import(&self, raw: &str) -> ExpenseResult<PendingImport> {
        let records = parse_payload(raw).map_err(ExpenseError::InvalidPayload)?;

        let replaced = match self.storage.expenses.load() {
            Ok(current) => current.len(),
            Err(err) if err.is_corrupt() => 0,
            Err(err) => return Err(err),
        };

        Ok(PendingImport { records, replaced })
    }

    /// Replace the whole expense list with a confirmed import
    pub fn apply_import(&self, pending: PendingImport) -> ExpenseResult<ImportSummary> {
        // A corrupt store is about to be overwritten, so there is nothing to keep
        let before = match self.storage.expenses.load() {
            Ok(current) => current,
            Err(err) if err.is_corrupt() => Vec::new(),
            Err(err) => return Err(err),
        };

        self.storage.expenses.save(&pending.records)?;

        let summary = ImportSummary {
            imported: pending.records.len(),
            replaced: before.len(),
        };

        self.storage.log_import(
            &before,
            &pending.records,
            format!("{} -> {} expenses", summary.replaced, summary.imported),
        );

        Ok(summary)
    }

    /// Count expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.storage.expenses.load()?.len())
    }
}

fn validate_input(input: ExpenseInput) -> ExpenseResult<ExpenseInput> {
    input
        .validate()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::models::Period;
    use crate::storage::{ExpenseRepository, MemoryStore};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn raw_bytes(storage: &Storage) -> Option<Vec<u8>> {
        storage.expenses.raw().unwrap()
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let record = service
            .add(ExpenseInput::new("Rent", 30000.0, Period::Monthly))
            .unwrap();

        assert_eq!(record.title, "Rent");
        assert_eq!(service.list().unwrap(), vec![record]);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let a = service.add(ExpenseInput::new("A", 1.0, Period::Daily)).unwrap();
        let b = service.add(ExpenseInput::new("A", 1.0, Period::Daily)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for input in [
            ExpenseInput::new("  ", 10.0, Period::Monthly),
            ExpenseInput::new("Rent", 0.0, Period::Monthly),
            ExpenseInput::new("Rent", -1.0, Period::Monthly),
            ExpenseInput::new("Rent", f64::NAN, Period::Monthly),
        ] {
            let err = service.add(input).unwrap_err();
            assert!(err.is_validation());
        }

        assert!(raw_bytes(&storage).is_none());
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_edit_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let record = service
            .add(ExpenseInput::new("Gym", 2000.0, Period::Monthly))
            .unwrap();

        let edited = service
            .edit(&record.id, ExpenseInput::new("Gym", 20000.0, Period::Yearly))
            .unwrap()
            .unwrap();

        assert_eq!(edited.id, record.id);
        assert_eq!(edited.amount, 20000.0);
        assert_eq!(service.get(&record.id).unwrap(), Some(edited));
    }

    #[test]
    fn test_edit_zero_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let record = service
            .add(ExpenseInput::new("Rent", 30000.0, Period::Monthly))
            .unwrap();
        let before = raw_bytes(&storage);

        let err = service
            .edit(&record.id, ExpenseInput::new("Rent", 0.0, Period::Monthly))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(raw_bytes(&storage), before);
        assert_eq!(service.get(&record.id).unwrap().unwrap().amount, 30000.0);
    }

    #[test]
    fn test_edit_missing_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(ExpenseInput::new("Rent", 1.0, Period::Monthly)).unwrap();
        let before = raw_bytes(&storage);

        let result = service
            .edit(&ExpenseId::from("gone"), ExpenseInput::new("X", 1.0, Period::Daily))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(raw_bytes(&storage), before);
    }

    #[test]
    fn test_delete_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let keep = service.add(ExpenseInput::new("Keep", 1.0, Period::Daily)).unwrap();
        let drop = service.add(ExpenseInput::new("Drop", 2.0, Period::Daily)).unwrap();

        let removed = service.delete(&drop.id).unwrap();
        assert_eq!(removed, Some(drop));
        assert_eq!(service.list().unwrap(), vec![keep]);
    }

    #[test]
    fn test_delete_missing_leaves_bytes_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        // Compact formatting differs from what save() would write
        let path = storage.paths().expenses_file();
        std::fs::write(
            &path,
            r#"[{"id":"a","title":"Rent","amount":30000,"period":"monthly"}]"#,
        )
        .unwrap();
        let before = std::fs::read(&path).unwrap();

        let service = ExpenseService::new(&storage);
        assert!(service.delete(&ExpenseId::from("nope")).unwrap().is_none());

        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let records = vec![
            ExpenseRecord {
                id: ExpenseId::from("abc-1"),
                title: "One".into(),
                amount: 1.0,
                period: Period::Daily,
            },
            ExpenseRecord {
                id: ExpenseId::from("abc-2"),
                title: "Two".into(),
                amount: 2.0,
                period: Period::Daily,
            },
            ExpenseRecord {
                id: ExpenseId::from("xyz"),
                title: "Three".into(),
                amount: 3.0,
                period: Period::Daily,
            },
        ];
        storage.expenses.save(&records).unwrap();
        let service = ExpenseService::new(&storage);

        assert_eq!(service.find("abc-2").unwrap().unwrap().title, "Two");
        assert_eq!(service.find("xy").unwrap().unwrap().title, "Three");
        assert!(service.find("nothing").unwrap().is_none());
        assert!(service.find("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(ExpenseInput::new("Rent", 30000.0, Period::Monthly)).unwrap();
        service.add(ExpenseInput::new("Coffee", 150.0, Period::Daily)).unwrap();

        let summary = service.summary().unwrap();
        assert!((summary.monthly_total - 34562.5).abs() < 1e-6);
        assert!((summary.yearly_total - 414750.0).abs() < 1e-6);
    }

    #[test]
    fn test_import_replaces_everything() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(ExpenseInput::new("Old", 1.0, Period::Daily)).unwrap();
        service.add(ExpenseInput::new("Older", 2.0, Period::Daily)).unwrap();

        let raw = r#"[
            {"id": "n1", "title": "Rent", "amount": 30000, "period": "monthly"},
            {"id": "n2", "title": "Coffee", "amount": 150, "period": "daily"},
            {"id": "n3", "title": "Insurance", "amount": 12000, "period": "yearly"}
        ]"#;

        let pending = service.prepare_import(raw).unwrap();
        assert!(pending.is_destructive());
        assert_eq!(pending.incoming_count(), 3);
        assert_eq!(pending.replaced_count(), 2);

        // Nothing changes before the import is applied
        assert_eq!(service.count().unwrap(), 2);

        let summary = service.apply_import(pending).unwrap();
        assert_eq!(summary, ImportSummary { imported: 3, replaced: 2 });

        let titles: Vec<_> = service.list().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Rent", "Coffee", "Insurance"]);
    }

    #[test]
    fn test_import_invalid_leaves_store_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(ExpenseInput::new("Rent", 30000.0, Period::Monthly)).unwrap();
        let before = raw_bytes(&storage);

        let bad_period = r#"[{"id": "a", "title": "Rent", "amount": 1, "period": "hourly"}]"#;
        let err = service.prepare_import(bad_period).unwrap_err();
        assert!(err.is_validation());

        let nan_amount = r#"[{"id": "a", "title": "Rent", "amount": NaN, "period": "daily"}]"#;
        let err = service.prepare_import(nan_amount).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidPayload(_)));

        let not_a_list = r#"{"id": "a"}"#;
        assert!(service.prepare_import(not_a_list).unwrap_err().is_validation());

        assert_eq!(raw_bytes(&storage), before);
    }

    #[test]
    fn test_import_over_corrupt_store() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.paths().expenses_file(), "garbage").unwrap();
        let service = ExpenseService::new(&storage);

        assert!(service.list().unwrap_err().is_corrupt());

        let pending = service
            .prepare_import(r#"[{"id": "a", "title": "Rent", "amount": 1, "period": "daily"}]"#)
            .unwrap();
        assert!(!pending.is_destructive());

        service.apply_import(pending).unwrap();
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let record = service.add(ExpenseInput::new("Rent", 1.0, Period::Monthly)).unwrap();
        service
            .edit(&record.id, ExpenseInput::new("Rent", 2.0, Period::Monthly))
            .unwrap();
        service.delete(&record.id).unwrap();
        let pending = service.prepare_import("[]").unwrap();
        service.apply_import(pending).unwrap();

        let entries = storage.audit().read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![
                Operation::Create,
                Operation::Update,
                Operation::Delete,
                Operation::Import
            ]
        );
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("amount: 1.0 -> 2.0")
        );
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_mutations() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        // A directory where the log file should be makes every append fail
        std::fs::create_dir_all(paths.audit_log()).unwrap();
        let repo = ExpenseRepository::new(Box::new(MemoryStore::new()));
        let storage = Storage::with_store(paths, repo);
        let service = ExpenseService::new(&storage);

        let record = service
            .add(ExpenseInput::new("Rent", 30000.0, Period::Monthly))
            .unwrap();
        assert_eq!(service.count().unwrap(), 1);

        let edited = service
            .edit(&record.id, ExpenseInput::new("Rent", 32000.0, Period::Monthly))
            .unwrap();
        assert_eq!(edited.unwrap().amount, 32000.0);

        let pending = service
            .prepare_import(r#"[{"id": "a", "title": "Gym", "amount": 2000, "period": "monthly"}]"#)
            .unwrap();
        let summary = service.apply_import(pending).unwrap();
        assert_eq!(summary, ImportSummary { imported: 1, replaced: 1 });

        let removed = service.delete(&ExpenseId::from("a")).unwrap();
        assert!(removed.is_some());
        assert_eq!(service.count().unwrap(), 0);
    }
}
