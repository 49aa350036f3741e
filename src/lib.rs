//! fintrack - Terminal-based personal income and expense tracker
//!
//! Records income and expenses as signed amounts, keeps the list in a
//! key-value record store and derives the balance, the income and expense
//! totals and the expense breakdown per category after every change.
//!
//! # Architecture
//!
//! - `models`: money, ids and the transaction record
//! - `storage`: persistence backends and the transaction store
//! - `services`: aggregate totals over the transaction list
//! - `presenter`: formats state for a rendering surface and owns the chart
//! - `controller`: applies user actions and triggers redraws
//! - `tui`: the ratatui front end
//! - `cli` and `display`: the non-interactive commands
//! - `config`: paths and settings
//!
//! # Example
//!
//! ```rust
//! use fintrack::models::Money;
//! use fintrack::services::Summary;
//! use fintrack::storage::{MemoryStore, TransactionStore};
//!
//! let mut store = TransactionStore::new(MemoryStore::new());
//! store.load();
//! store.add("Salary", Money::from_cents(100_000), "Job").unwrap();
//! store.add("Lunch", Money::from_cents(-2_000), "Food").unwrap();
//!
//! let summary = Summary::from_transactions(store.all());
//! assert_eq!(summary.balance, Money::from_cents(98_000));
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod presenter;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::FintrackError;
