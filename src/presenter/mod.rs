//! Presenter
//!
//! Turns transactions and totals into what the surface shows, and owns the
//! live chart instance so a redraw never leaves an old one behind.

pub mod chart;
pub mod surface;

pub use chart::{ChartBackend, ChartConfig, ChartHandle, ChartKind, LegendPosition};
pub use surface::{ListRow, Notice, NoticeLevel, RenderSurface, TotalsView};

use tracing::debug;

use crate::config::Settings;
use crate::controller::Panels;
use crate::models::{Money, Transaction};
use crate::services::{CategoryTotal, Summary};

/// Label shown for expenses entered without a category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

pub struct Presenter<U: RenderSurface, C: ChartBackend> {
    surface: U,
    charts: C,
    chart: Option<ChartHandle>,
    currency_symbol: String,
    chart_title: String,
}

impl<U: RenderSurface, C: ChartBackend> Presenter<U, C> {
    pub fn new(surface: U, charts: C, settings: &Settings) -> Self {
        Self {
            surface,
            charts,
            chart: None,
            currency_symbol: settings.currency_symbol.clone(),
            chart_title: settings.chart_title.clone(),
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Replace the history rows, one per transaction, oldest first
    pub fn render_list(&mut self, transactions: &[Transaction]) {
        let rows: Vec<ListRow> = transactions
            .iter()
            .map(|txn| ListRow {
                id: txn.id,
                description: txn.description.clone(),
                category: txn.category.clone(),
                amount: self.format_money(txn.amount.abs()),
                kind: txn.kind(),
            })
            .collect();
        self.surface.set_rows(rows);
    }

    pub fn render_totals(&mut self, balance: Money, income: Money, expense: Money) {
        let totals = TotalsView {
            balance: self.format_money(balance),
            income: self.format_money(income),
            expense: self.format_money(expense),
        };
        self.surface.set_totals(totals);
    }

    /// Redraw the expense chart, destroying the previous instance first
    pub fn render_chart(&mut self, categories: &[CategoryTotal]) {
        if let Some(old) = self.chart.take() {
            self.charts.destroy(old);
        }

        let expense_total: Money = categories.iter().map(|c| c.total).sum();
        let config = ChartConfig {
            kind: ChartKind::Doughnut,
            title: self.chart_title.clone(),
            dataset_label: chart::DATASET_LABEL.to_string(),
            labels: categories.iter().map(|c| display_label(&c.category)).collect(),
            data: categories.iter().map(|c| c.total.to_f64()).collect(),
            shares: categories.iter().map(|c| c.share_of(expense_total)).collect(),
            palette: &chart::PALETTE,
            legend: LegendPosition::Top,
        };

        let handle = self.charts.construct(config);
        debug!(handle = handle.0, slices = categories.len(), "chart rendered");
        self.chart = Some(handle);
    }

    /// Totals and chart for one recompute
    pub fn render_summary(&mut self, summary: &Summary) {
        self.render_totals(summary.balance, summary.income, summary.expense);
        self.render_chart(&summary.categories);
    }

    pub fn show_panels(&mut self, panels: Panels) {
        self.surface.set_panels(panels);
    }

    pub fn notify(&mut self, notice: Notice) {
        self.surface.notify(notice);
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    /// Handle of the chart currently on screen
    pub fn current_chart(&self) -> Option<ChartHandle> {
        self.chart
    }
}

fn display_label(category: &str) -> String {
    if category.is_empty() {
        UNCATEGORIZED_LABEL.to_string()
    } else {
        category.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use crate::tui::chart::TuiChart;
    use crate::tui::surface::TuiSurface;

    fn presenter() -> Presenter<TuiSurface, TuiChart> {
        Presenter::new(TuiSurface::new(), TuiChart::new(), &Settings::default())
    }

    fn txn(id: u64, cents: i64, category: &str) -> Transaction {
        Transaction::new(TransactionId::new(id), "entry", Money::from_cents(cents), category)
    }

    #[test]
    fn test_render_list_rows() {
        let mut presenter = presenter();
        presenter.render_list(&[txn(1, 100_000, "Job"), txn(2, -2_050, "Food")]);

        let rows = presenter.surface().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, TransactionId::new(1));
        assert_eq!(rows[1].amount, "R$ 20.50");
        assert_eq!(rows[1].kind, crate::models::TransactionKind::Expense);
    }

    #[test]
    fn test_render_totals_formats_currency() {
        let mut presenter = presenter();
        presenter.render_totals(
            Money::from_cents(98_000),
            Money::from_cents(100_000),
            Money::from_cents(2_000),
        );

        let totals = presenter.surface().totals();
        assert_eq!(totals.balance, "R$ 980.00");
        assert_eq!(totals.income, "R$ 1000.00");
        assert_eq!(totals.expense, "R$ 20.00");
    }

    #[test]
    fn test_render_chart_replaces_previous_instance() {
        let mut presenter = presenter();
        let categories = vec![CategoryTotal {
            category: "Food".into(),
            total: Money::from_cents(2_000),
        }];

        presenter.render_chart(&categories);
        let first = presenter.current_chart().unwrap();
        presenter.render_chart(&categories);
        let second = presenter.current_chart().unwrap();

        assert_ne!(first, second);
        assert_eq!(presenter.charts().live_count(), 1);
        let config = presenter.charts().current().unwrap();
        assert_eq!(config.labels, vec!["Food".to_string()]);
        assert_eq!(config.data, vec![20.0]);
        assert_eq!(config.shares, vec![100.0]);
    }

    #[test]
    fn test_empty_category_gets_a_label() {
        let mut presenter = presenter();
        presenter.render_chart(&[CategoryTotal {
            category: String::new(),
            total: Money::from_cents(500),
        }]);
        let config = presenter.charts().current().unwrap();
        assert_eq!(config.labels, vec![UNCATEGORIZED_LABEL.to_string()]);
    }
}
