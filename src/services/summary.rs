//! Aggregate totals over a transaction list
//!
//! Everything here is a pure function of the list. Sums are exact because
//! amounts are integer cents.

use crate::models::{Money, Transaction};

/// Sum of all amounts
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|t| t.amount).sum()
}

/// Sum of positive amounts
pub fn income_total(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Absolute sum of negative amounts (never negative)
pub fn expense_total(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum()
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    /// Absolute amount spent
    pub total: Money,
}

impl CategoryTotal {
    /// Percentage of `expense_total` this category accounts for
    pub fn share_of(&self, expense_total: Money) -> f64 {
        if expense_total.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / expense_total.cents() as f64 * 100.0
        }
    }
}

/// Expense totals grouped by category
///
/// Only negative amounts count. Categories appear in the order they were
/// first seen.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount.abs(),
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount.abs(),
            }),
        }
    }

    totals
}

/// All derived figures for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub balance: Money,
    pub income: Money,
    pub expense: Money,
    pub categories: Vec<CategoryTotal>,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            balance: balance(transactions),
            income: income_total(transactions),
            expense: expense_total(transactions),
            categories: category_totals(transactions),
        }
    }
}
