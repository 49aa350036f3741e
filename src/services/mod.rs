//! Business logic layer
//!
//! Pure aggregations over the transaction list.

pub mod summary;

pub use summary::{balance, category_totals, expense_total, income_total, CategoryTotal, Summary};
