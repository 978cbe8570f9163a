//! Key-value store boundary
//!
//! The repository only needs to read and overwrite a named slot of bytes.
//! [`FileStore`] keeps each slot in its own JSON file; [`MemoryStore`] keeps
//! them in a map.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_optional, write_atomic};

/// A durable slot-based byte store
pub trait Store {
    /// Read a slot, `None` if it was never written
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>>;

    /// Overwrite a slot
    ///
    /// A subsequent `get` sees either the old or the new bytes, never a mix.
    fn set(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()>;
}

/// Store backed by one `<key>.json` file per slot
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing a slot
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        read_optional(self.path_for(key))
    }

    fn set(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        write_atomic(self.path_for(key), bytes)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already filled
    pub fn with_slot(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.to_string(), bytes.into());
        }
        store
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
