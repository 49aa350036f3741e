//! Transaction store
//!
//! Owns the ordered transaction list and mirrors it to a single named record
//! after every mutation.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction, TransactionId};

use super::kv::KeyValueStore;

/// Name of the record holding the serialized list
pub const TRANSACTIONS_KEY: &str = "transactions";

/// What `load` found in the backend
#[derive(Debug)]
pub enum LoadOutcome {
    /// No record was stored yet
    Empty,
    /// The record was read; holds the number of transactions
    Loaded(usize),
    /// The record could not be read or parsed; the list starts empty
    Recovered(FintrackError),
}

/// Ordered, persistent list of transactions
pub struct TransactionStore<S: KeyValueStore> {
    backend: S,
    transactions: Vec<Transaction>,
    /// `None` once the id space is used up
    next_id: Option<TransactionId>,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Create an empty store on top of a backend
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            transactions: Vec::new(),
            next_id: Some(TransactionId::new(1)),
        }
    }

    /// Replace the in-memory list with the persisted one
    ///
    /// Never fails: a missing record yields an empty list, and a malformed one
    /// is reported through [`LoadOutcome::Recovered`] after falling back to an
    /// empty list.
    pub fn load(&mut self) -> LoadOutcome {
        self.transactions.clear();

        let raw = match self.backend.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved transactions");
                return LoadOutcome::Empty;
            }
            Err(e) => {
                warn!(error = %e, "failed to read saved transactions, starting empty");
                return LoadOutcome::Recovered(FintrackError::PersistenceRead(e.to_string()));
            }
        };

        // `null` counts as nothing stored
        let parsed: Option<Vec<Transaction>> = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "saved transactions are malformed, starting empty");
                return LoadOutcome::Recovered(FintrackError::PersistenceRead(e.to_string()));
            }
        };
        let Some(parsed) = parsed else {
            return LoadOutcome::Empty;
        };

        let mut seen = HashSet::new();
        for txn in parsed {
            if let Err(e) = txn.validate() {
                warn!(id = %txn.id, error = %e, "dropping invalid transaction");
                continue;
            }
            // The last id leaves nothing to hand out after it
            let Some(following) = txn.id.next() else {
                warn!(id = %txn.id, "dropping transaction with out-of-range id");
                continue;
            };
            if !seen.insert(txn.id) {
                warn!(id = %txn.id, "dropping transaction with duplicate id");
                continue;
            }
            if self.next_id.map_or(true, |next| following > next) {
                self.next_id = Some(following);
            }
            self.transactions.push(txn);
        }

        debug!(count = self.transactions.len(), "loaded transactions");
        LoadOutcome::Loaded(self.transactions.len())
    }

    /// Validate and append a new transaction, then persist the list
    ///
    /// Validation failures leave the list and the backend untouched, and so
    /// does running out of ids. A failed write keeps the new transaction in
    /// memory and returns [`FintrackError::PersistenceWrite`].
    pub fn add(
        &mut self,
        description: &str,
        amount: Money,
        category: &str,
    ) -> FintrackResult<Transaction> {
        let id = self
            .next_id
            .ok_or_else(|| FintrackError::IdsExhausted("every transaction id is taken".into()))?;
        let txn = Transaction::new(
            id,
            description.trim(),
            amount,
            category.trim(),
        );
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.next_id = id.next();
        self.transactions.push(txn.clone());
        debug!(id = %txn.id, amount = %txn.amount, "added transaction");

        self.persist()?;
        Ok(txn)
    }

    /// Remove a transaction by id, then persist the list
    ///
    /// Removing an unknown id is not an error. Returns whether a record was
    /// removed.
    pub fn remove(&mut self, id: TransactionId) -> FintrackResult<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        debug!(%id, removed, "remove transaction");

        self.persist()?;
        Ok(removed)
    }

    /// All transactions, oldest first
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The persistence backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Write the whole list as one JSON array
    fn persist(&mut self) -> FintrackResult<()> {
        let snapshot = serde_json::to_string(&self.transactions)
            .map_err(|e| FintrackError::PersistenceWrite(e.to_string()))?;

        self.backend
            .set(TRANSACTIONS_KEY, &snapshot)
            .map_err(|e| {
                warn!(error = %e, "failed to save transactions");
                FintrackError::PersistenceWrite(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    fn loaded_store() -> TransactionStore<MemoryStore> {
        let mut store = TransactionStore::new(MemoryStore::new());
        assert!(matches!(store.load(), LoadOutcome::Empty));
        store
    }

    fn three_item_store() -> TransactionStore<MemoryStore> {
        let mut store = loaded_store();
        store.add("Salary", Money::from_cents(100_000), "Job").unwrap();
        store.add("Lunch", Money::from_cents(-2_000), "Food").unwrap();
        store.add("Bus", Money::from_cents(-450), "Transport").unwrap();
        store
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = loaded_store();

        let txn = store.add("  Salary ", Money::from_cents(100_000), "Job").unwrap();
        assert_eq!(txn.description, "Salary");
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0], txn);
        assert_eq!(store.backend().writes(), 1);

        let raw = store.backend().record(TRANSACTIONS_KEY).unwrap();
        let saved: Vec<Transaction> = serde_json::from_str(raw).unwrap();
        assert_eq!(saved, store.all());
    }

    #[test]
    fn test_add_rejects_invalid_without_writing() {
        let mut store = loaded_store();

        let err = store.add("", Money::from_cents(500), "Food").unwrap_err();
        assert!(err.is_validation());

        let err = store.add("Coffee", Money::zero(), "Food").unwrap_err();
        assert!(err.is_validation());

        assert!(store.is_empty());
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = three_item_store();
        let ids: Vec<u64> = store.all().iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut store = three_item_store();
        store.remove(TransactionId::new(3)).unwrap();
        let txn = store.add("Tea", Money::from_cents(-300), "Food").unwrap();
        assert_eq!(txn.id.value(), 4);
    }

    #[test]
    fn test_ids_continue_after_loaded_maximum() {
        let raw = r#"[{"id":512345,"description":"Rent","amount":-800,"category":"Home"},
                      {"id":17,"description":"Gift","amount":50,"category":"Other"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));
        assert!(matches!(store.load(), LoadOutcome::Loaded(2)));

        let txn = store.add("Tea", Money::from_cents(-300), "Food").unwrap();
        assert_eq!(txn.id.value(), 512346);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = three_item_store();
        let before = store.all().to_vec();

        let removed = store.remove(TransactionId::new(999)).unwrap();
        assert!(!removed);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = three_item_store();

        assert!(store.remove(TransactionId::new(2)).unwrap());
        let once = store.all().to_vec();

        assert!(!store.remove(TransactionId::new(2)).unwrap());
        assert_eq!(store.all(), once.as_slice());
        assert_eq!(once.len(), 2);
        assert!(store.get(TransactionId::new(2)).is_none());
    }

    #[test]
    fn test_load_malformed_recovers_empty() {
        let backend = MemoryStore::with_record(TRANSACTIONS_KEY, "{not json");
        let mut store = TransactionStore::new(backend);

        match store.load() {
            LoadOutcome::Recovered(FintrackError::PersistenceRead(_)) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_null_record_is_empty() {
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, "null"));
        assert!(matches!(store.load(), LoadOutcome::Empty));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let raw = r#"[{"id":5,"description":"A","amount":1,"category":"x"},
                      {"id":5,"description":"B","amount":2,"category":"y"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));
        assert!(matches!(store.load(), LoadOutcome::Loaded(1)));
        assert_eq!(store.all()[0].description, "A");
    }

    #[test]
    fn test_load_drops_invalid_records() {
        let raw = r#"[{"id":1,"description":"","amount":5,"category":"x"},
                      {"id":2,"description":"Dust","amount":0.001,"category":"x"},
                      {"id":3,"description":"Zero","amount":0,"category":"x"},
                      {"id":4,"description":"Tea","amount":-3,"category":"Food"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));

        assert!(matches!(store.load(), LoadOutcome::Loaded(1)));
        assert_eq!(store.all()[0].description, "Tea");
        assert!(store.all().iter().all(|t| !t.amount.is_zero()));
    }

    #[test]
    fn test_load_out_of_range_amount_recovers_empty() {
        let raw = r#"[{"id":1,"description":"x","amount":-92233720368547758.08,"category":"c"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));

        assert!(matches!(
            store.load(),
            LoadOutcome::Recovered(FintrackError::PersistenceRead(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_last_possible_id() {
        let raw = r#"[{"id":18446744073709551615,"description":"Max","amount":1,"category":"c"},
                      {"id":4,"description":"Tea","amount":-3,"category":"Food"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));

        assert!(matches!(store.load(), LoadOutcome::Loaded(1)));
        let txn = store.add("Cake", Money::from_cents(-500), "Food").unwrap();
        assert_eq!(txn.id.value(), 5);
    }

    #[test]
    fn test_add_stops_when_ids_run_out() {
        let raw = r#"[{"id":18446744073709551614,"description":"Big","amount":1,"category":"c"}]"#;
        let mut store = TransactionStore::new(MemoryStore::with_record(TRANSACTIONS_KEY, raw));
        assert!(matches!(store.load(), LoadOutcome::Loaded(1)));

        let last = store.add("Last", Money::from_cents(100), "c").unwrap();
        assert_eq!(last.id.value(), u64::MAX);
        let writes = store.backend().writes();

        let err = store.add("One more", Money::from_cents(100), "c").unwrap_err();
        assert!(matches!(err, FintrackError::IdsExhausted(_)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.backend().writes(), writes);
    }

    #[test]
    fn test_huge_amounts_never_overflow_totals() {
        let mut store = loaded_store();
        let max = Money::parse("1000000000000").unwrap();
        store.add("A", max, "x").unwrap();
        store.add("B", max, "x").unwrap();

        let summary = crate::services::Summary::from_transactions(store.all());
        assert_eq!(summary.balance.cents(), 2 * max.cents());
    }

    #[test]
    fn test_failed_write_keeps_mutation() {
        let mut backend = MemoryStore::new();
        backend.fail_writes(true);
        let mut store = TransactionStore::new(backend);
        store.load();

        let err = store.add("Lunch", Money::from_cents(-2000), "Food").unwrap_err();
        assert!(matches!(err, FintrackError::PersistenceWrite(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();

        let mut store = TransactionStore::new(JsonFileStore::new(temp_dir.path()));
        store.load();
        store.add("Salary", Money::from_cents(100_000), "Job").unwrap();
        store.add("Lunch", Money::from_cents(-2_050), "Food").unwrap();
        store.add("Snack", Money::from_cents(-199), "Food").unwrap();
        let expected = store.all().to_vec();

        let mut reloaded = TransactionStore::new(JsonFileStore::new(temp_dir.path()));
        assert!(matches!(reloaded.load(), LoadOutcome::Loaded(3)));
        assert_eq!(reloaded.all(), expected.as_slice());
    }
}
