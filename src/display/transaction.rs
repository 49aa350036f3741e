//! Transaction display formatting
//!
//! Renders the transaction list as a table for the `list` command.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::presenter::UNCATEGORIZED_LABEL;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, currency: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            description: txn.description.clone(),
            category: category_label(&txn.category).to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount.format_with_symbol(currency),
        }
    }
}

fn category_label(category: &str) -> &str {
    if category.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        category
    }
}

/// Format transactions as a table, oldest first
pub fn format_transaction_table(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow::new(t, currency));
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());

    format!("{}\n", table)
}

/// Format one transaction for display after it was added
pub fn format_transaction_details(txn: &Transaction, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", category_label(&txn.category)));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency)
    ));

    output
}
