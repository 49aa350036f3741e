//! Storage layer for fintrack
//!
//! A key-value persistence backend (JSON files with atomic writes, or memory)
//! and the transaction store built on top of it.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use transactions::{LoadOutcome, TransactionStore, TRANSACTIONS_KEY};

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Open the file-backed transaction store for the given paths
///
/// Creates the data directory if needed. The list is not loaded yet.
pub fn open_store(paths: &FintrackPaths) -> Result<TransactionStore<JsonFileStore>, FintrackError> {
    paths.ensure_directories()?;
    Ok(TransactionStore::new(JsonFileStore::new(paths.data_dir())))
}
