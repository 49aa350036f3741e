//! Summary CLI command

use crate::config::Settings;
use crate::display::format_summary;
use crate::services::Summary;
use crate::storage::{KeyValueStore, TransactionStore};

use super::load_for_reading;

/// Print balance, income, expenses and the per-category breakdown
pub fn handle_summary_command<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    settings: &Settings,
) {
    load_for_reading(store);
    let summary = Summary::from_transactions(store.all());
    print!("{}", format_summary(&summary, &settings.currency_symbol));
}
