//! Summary display formatting

use crate::presenter::UNCATEGORIZED_LABEL;
use crate::services::Summary;

/// Totals followed by the expense breakdown per category
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance:  {}\n",
        summary.balance.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Income:   {}\n",
        summary.income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Expenses: {}\n",
        summary.expense.format_with_symbol(currency)
    ));

    if summary.categories.is_empty() {
        return output;
    }

    output.push_str("\nExpenses by category\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for entry in &summary.categories {
        let name = if entry.category.is_empty() {
            UNCATEGORIZED_LABEL
        } else {
            entry.category.as_str()
        };
        output.push_str(&format!(
            "{:20} {:>14} {:>7.1}%\n",
            name,
            entry.total.format_with_symbol(currency),
            entry.share_of(summary.expense)
        ));
    }

    output
}
