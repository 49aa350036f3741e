//! Key-value persistence backends
//!
//! The transaction store keeps its whole list under one named record. A
//! backend only has to read and replace records by key.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::file_io::{read_text, write_text_atomic};

/// A persistent string-valued record store
pub trait KeyValueStore {
    /// Read the record stored under `key`, if any
    fn get(&self, key: &str) -> FintrackResult<Option<String>>;

    /// Replace the record stored under `key`
    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()>;
}

/// Stores each record as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        read_text(self.record_path(key))
    }

    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()> {
        write_text_atomic(self.record_path(key), value)
    }
}

/// In-memory backend
///
/// Counts writes and can be told to fail them, which makes it handy for
/// exercising the error paths of the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one record already present
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.records.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every following `set` fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw record contents
    pub fn record(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FintrackResult<()> {
        if self.fail_writes {
            return Err(FintrackError::Io(format!("write to '{}' refused", key)));
        }
        self.records.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path());

        assert_eq!(store.get("transactions").unwrap(), None);

        store.set("transactions", "[]").unwrap();
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_file_store_replaces_whole_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path());

        store.set("k", r#"[{"a":1},{"a":2}]"#).unwrap();
        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.record("k"), Some("2"));

        store.fail_writes(true);
        assert!(store.set("k", "3").is_err());
        assert_eq!(store.writes(), 2);
        assert_eq!(store.record("k"), Some("2"));
    }
}
