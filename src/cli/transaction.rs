//! Transaction CLI commands
//!
//! Add, list and delete transactions without starting the TUI.

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::controller::FormInput;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{TransactionId, TransactionKind};
use crate::storage::{KeyValueStore, TransactionStore};

use super::{load_for_reading, load_for_writing};

/// Transaction subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TransactionCommands {
    /// Add a transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g. "1000", "20.50", "R$ 3,99"); the sign comes from --expense
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long, default_value = "")]
        category: String,
        /// Record as an expense instead of income
        #[arg(short, long)]
        expense: bool,
    },
    /// List transactions, oldest first
    #[command(alias = "ls")]
    List {
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (e.g. "3" or "#3")
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            expense,
        } => {
            let kind = if expense {
                TransactionKind::Expense
            } else {
                TransactionKind::Income
            };
            let submission = FormInput::new(description, amount, category, kind).validate()?;

            load_for_writing(store)?;
            let txn = store.add(
                &submission.description,
                submission.amount,
                &submission.category,
            )?;
            info!(id = %txn.id, "transaction added");

            println!("Added transaction:");
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::List { limit } => {
            load_for_reading(store);
            let all = store.all();
            let shown = match limit {
                Some(limit) => &all[all.len().saturating_sub(limit)..],
                None => all,
            };
            print!("{}", format_transaction_table(shown, currency));
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = id.parse().map_err(|_| {
                FintrackError::Validation(format!("Invalid transaction ID: '{}'", id))
            })?;

            load_for_writing(store)?;
            if store.remove(id)? {
                info!(%id, "transaction deleted");
                println!("Deleted transaction {}", id);
            } else {
                println!("No transaction with ID {}", id);
            }
        }
    }

    Ok(())
}
