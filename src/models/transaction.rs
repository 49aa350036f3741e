//! Transaction model
//!
//! A transaction is one income or expense entry. Records are never edited in
//! place: they are created from a validated submission and removed by id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::{decimal_units, Money};

/// Whether a submitted amount is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    /// Apply this kind's sign to an amount, ignoring the amount's own sign
    pub fn apply(self, amount: Money) -> Money {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }

    /// The other kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Kind implied by a signed amount
    pub fn of(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Expense
        } else {
            Self::Income
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense entry
///
/// Serialized as `{"id", "description", "amount", "category"}` with the
/// amount as a decimal number of currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// What the money was for
    pub description: String,

    /// Signed amount (positive for income, negative for expense)
    #[serde(with = "decimal_units")]
    pub amount: Money,

    /// Free-text label used to group expenses
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::of(self.amount)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }

        if !self.amount.is_in_range() {
            return Err(TransactionValidationError::AmountOutOfRange);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.description, self.category, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    ZeroAmount,
    AmountOutOfRange,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::ZeroAmount => write!(f, "Amount must not be zero"),
            Self::AmountOutOfRange => write!(f, "Amount is too large"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
