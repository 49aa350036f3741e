//! CLI command handlers
//!
//! Bridges the clap argument parsing with the transaction store and the
//! aggregate services.

pub mod summary;
pub mod transaction;

pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FintrackError, FintrackResult};
use crate::storage::{KeyValueStore, LoadOutcome, TransactionStore};

/// Load the saved list for a read-only command
///
/// A malformed snapshot is reported and the command continues on an empty
/// list.
pub fn load_for_reading<S: KeyValueStore>(store: &mut TransactionStore<S>) {
    if let LoadOutcome::Recovered(e) = store.load() {
        eprintln!("Warning: {}. Showing an empty list.", e);
    }
}

/// Load the saved list for a command that writes it back
///
/// Refuses to continue on a malformed snapshot, since saving would replace
/// it with whatever is left in memory.
pub fn load_for_writing<S: KeyValueStore>(store: &mut TransactionStore<S>) -> FintrackResult<()> {
    match store.load() {
        LoadOutcome::Recovered(e) => Err(FintrackError::PersistenceRead(format!(
            "{}. Fix or remove the file before making changes",
            e
        ))),
        LoadOutcome::Empty | LoadOutcome::Loaded(_) => Ok(()),
    }
}
