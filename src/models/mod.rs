//! Core data models for fintrack
//!
//! Transactions, their identifiers and the fixed-point money type.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
