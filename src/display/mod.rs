//! Display formatting for terminal output
//!
//! Tables and summaries printed by the CLI commands.

pub mod summary;
pub mod transaction;

pub use summary::format_summary;
pub use transaction::{format_transaction_details, format_transaction_table};
