//! Transaction entry form
//!
//! Raw field values as typed by the user, and their validation into a
//! signed amount ready for the store.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionKind};

/// Current values of the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub description: String,
    /// Amount exactly as typed
    pub amount: String,
    pub category: String,
    /// Income/expense selector
    pub kind: TransactionKind,
}

/// A validated form, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub description: String,
    /// Signed by the selector
    pub amount: Money,
    pub category: String,
}

impl FormInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            kind,
        }
    }

    /// Check the fields and apply the selector's sign to the amount
    ///
    /// An empty description, an unreadable amount and a zero amount are all
    /// validation errors.
    pub fn validate(&self) -> FintrackResult<Submission> {
        let description = self.description.trim();
        if description.is_empty() || self.amount.trim().is_empty() {
            return Err(FintrackError::Validation(
                "Please fill in the description and the amount".into(),
            ));
        }

        let amount =
            Money::parse(&self.amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
        if amount.is_zero() {
            return Err(FintrackError::Validation("Amount must not be zero".into()));
        }

        Ok(Submission {
            description: description.to_string(),
            amount: self.kind.apply(amount),
            category: self.category.trim().to_string(),
        })
    }
}
