//! Controller
//!
//! Receives user actions, applies them to the store and asks the presenter
//! to redraw. Each handler runs to completion before the next event.

pub mod form;
pub mod panels;

pub use form::{FormInput, Submission};
pub use panels::Panels;

use tracing::{debug, info};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Transaction, TransactionId};
use crate::presenter::{ChartBackend, Notice, Presenter, RenderSurface};
use crate::services::Summary;
use crate::storage::{KeyValueStore, LoadOutcome, TransactionStore};

pub struct Controller<S: KeyValueStore, U: RenderSurface, C: ChartBackend> {
    store: TransactionStore<S>,
    presenter: Presenter<U, C>,
    panels: Panels,
}

impl<S: KeyValueStore, U: RenderSurface, C: ChartBackend> Controller<S, U, C> {
    pub fn new(store: TransactionStore<S>, presenter: Presenter<U, C>) -> Self {
        Self {
            store,
            presenter,
            panels: Panels::default(),
        }
    }

    /// Load saved transactions and draw the first frame
    pub fn start(&mut self) {
        match self.store.load() {
            LoadOutcome::Recovered(e) => {
                self.presenter
                    .notify(Notice::warning(format!("{}. Starting with an empty list.", e)));
            }
            LoadOutcome::Loaded(count) => info!(count, "transactions loaded"),
            LoadOutcome::Empty => info!("no saved transactions"),
        }

        self.presenter.show_panels(self.panels);
        self.refresh();
    }

    /// Submit the surface's form
    pub fn submit(&mut self) -> FintrackResult<Transaction> {
        let form = self.presenter.surface().form();
        self.submit_form(&form)
    }

    /// Validate a form and add the transaction it describes
    ///
    /// When the transaction is rejected the user is notified and nothing else
    /// changes.
    /// On success the form is reset (selector back to income). A failed save
    /// still redraws with the new transaction and is reported as a warning.
    pub fn submit_form(&mut self, form: &FormInput) -> FintrackResult<Transaction> {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(e) => {
                debug!(error = %e, "submission rejected");
                self.presenter.notify(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        let result = self.store.add(
            &submission.description,
            submission.amount,
            &submission.category,
        );

        match result {
            Err(e) if !matches!(e, FintrackError::PersistenceWrite(_)) => {
                self.presenter.notify(Notice::error(e.to_string()));
                Err(e)
            }
            result => {
                self.presenter.surface_mut().reset_form();
                self.after_mutation(result)
            }
        }
    }

    /// Delete a transaction by id; unknown ids are ignored
    pub fn delete(&mut self, id: TransactionId) -> FintrackResult<bool> {
        let result = self.store.remove(id);
        self.after_mutation(result)
    }

    /// Flip the history panel, hiding the chart
    pub fn toggle_list(&mut self) {
        self.panels = self.panels.toggle_list();
        self.presenter.show_panels(self.panels);
        if self.panels.list_visible() {
            self.presenter.render_list(self.store.all());
        }
    }

    /// Flip the chart panel, hiding the history
    pub fn toggle_chart(&mut self) {
        self.panels = self.panels.toggle_chart();
        self.presenter.show_panels(self.panels);
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter<U, C> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter<U, C> {
        &mut self.presenter
    }

    /// Recompute everything and redraw list, totals and chart
    fn refresh(&mut self) {
        let summary = Summary::from_transactions(self.store.all());
        self.presenter.render_list(self.store.all());
        self.presenter.render_summary(&summary);
    }

    /// Redraw after a store mutation and surface a failed save as a warning
    fn after_mutation<T>(&mut self, result: FintrackResult<T>) -> FintrackResult<T> {
        self.refresh();
        if let Err(FintrackError::PersistenceWrite(ref reason)) = result {
            self.presenter.notify(Notice::warning(format!(
                "Changes are kept for this session but could not be saved: {}",
                reason
            )));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::TransactionKind;
    use crate::presenter::NoticeLevel;
    use crate::storage::{MemoryStore, TRANSACTIONS_KEY};
    use crate::tui::chart::TuiChart;
    use crate::tui::surface::TuiSurface;

    type TestController = Controller<MemoryStore, TuiSurface, TuiChart>;

    fn controller_with(backend: MemoryStore) -> TestController {
        let presenter = Presenter::new(TuiSurface::new(), TuiChart::new(), &Settings::default());
        let mut controller = Controller::new(TransactionStore::new(backend), presenter);
        controller.start();
        controller
    }

    fn controller() -> TestController {
        controller_with(MemoryStore::new())
    }

    fn income(description: &str, amount: &str, category: &str) -> FormInput {
        FormInput::new(description, amount, category, TransactionKind::Income)
    }

    fn expense(description: &str, amount: &str, category: &str) -> FormInput {
        FormInput::new(description, amount, category, TransactionKind::Expense)
    }

    #[test]
    fn test_salary_then_lunch() {
        let mut controller = controller();
        controller.submit_form(&income("Salary", "1000", "Job")).unwrap();
        controller.submit_form(&expense("Lunch", "20", "Food")).unwrap();

        let surface = controller.presenter().surface();
        assert_eq!(surface.totals().balance, "R$ 980.00");
        assert_eq!(surface.totals().income, "R$ 1000.00");
        assert_eq!(surface.totals().expense, "R$ 20.00");

        let chart = controller.presenter().charts().current().unwrap();
        assert_eq!(chart.labels, vec!["Food".to_string()]);
        assert_eq!(chart.data, vec![20.0]);
    }

    #[test]
    fn test_submit_adds_exactly_one_with_selected_sign() {
        let mut controller = controller();
        let txn = controller.submit_form(&expense("Lunch", "20", "Food")).unwrap();
        assert_eq!(controller.transactions().len(), 1);
        assert_eq!(txn.amount.cents(), -2_000);

        let txn = controller.submit_form(&income("Gift", "-50", "Other")).unwrap();
        assert_eq!(controller.transactions().len(), 2);
        assert_eq!(txn.amount.cents(), 5_000);
    }

    #[test]
    fn test_submit_through_surface_resets_form() {
        let mut controller = controller();
        {
            let surface = controller.presenter_mut().surface_mut();
            surface.fill_form(&expense("Lunch", "20", "Food"));
        }

        controller.submit().unwrap();

        let form = controller.presenter().surface().form();
        assert_eq!(form, FormInput::default());
        assert_eq!(form.kind, TransactionKind::Income);
    }

    #[test]
    fn test_empty_description_changes_nothing() {
        let mut controller = controller();
        controller.submit_form(&income("Salary", "1000", "Job")).unwrap();
        let writes = controller.store().backend().writes();

        let err = controller.submit_form(&expense("", "20", "Food")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.transactions().len(), 1);
        assert_eq!(controller.store().backend().writes(), writes);

        let notice = controller.presenter().surface().current_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_rejected_submit_keeps_form() {
        let mut controller = controller();
        controller
            .presenter_mut()
            .surface_mut()
            .fill_form(&expense("Lunch", "abc", "Food"));

        assert!(controller.submit().is_err());
        assert_eq!(controller.presenter().surface().form().amount, "abc");
    }

    #[test]
    fn test_delete_rerenders() {
        let mut controller = controller();
        controller.submit_form(&income("Salary", "1000", "Job")).unwrap();
        let lunch = controller.submit_form(&expense("Lunch", "20", "Food")).unwrap();

        assert!(controller.delete(lunch.id).unwrap());
        assert_eq!(controller.presenter().surface().rows().len(), 1);
        assert_eq!(controller.presenter().surface().totals().expense, "R$ 0.00");
        assert!(controller.presenter().charts().current().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_keeps_list() {
        let mut controller = controller();
        for (d, a) in [("A", "1"), ("B", "2"), ("C", "3")] {
            controller.submit_form(&expense(d, a, "Misc")).unwrap();
        }
        let before = controller.transactions().to_vec();

        assert!(!controller.delete(TransactionId::new(999)).unwrap());
        assert_eq!(controller.transactions(), before.as_slice());
    }

    #[test]
    fn test_panels_are_exclusive() {
        let mut controller = controller();
        assert_eq!(controller.panels(), Panels::None);

        controller.toggle_list();
        assert_eq!(controller.panels(), Panels::List);
        assert_eq!(controller.presenter().surface().panels(), Panels::List);

        controller.toggle_chart();
        assert_eq!(controller.panels(), Panels::Chart);
        assert!(!controller.presenter().surface().panels().list_visible());

        controller.toggle_chart();
        assert_eq!(controller.panels(), Panels::None);
    }

    #[test]
    fn test_showing_list_rerenders_rows() {
        let mut controller = controller();
        controller.submit_form(&income("Salary", "1000", "Job")).unwrap();
        controller.presenter_mut().surface_mut().set_rows(Vec::new());

        controller.toggle_list();
        assert_eq!(controller.presenter().surface().rows().len(), 1);
    }

    #[test]
    fn test_malformed_snapshot_warns_and_starts_empty() {
        let controller = controller_with(MemoryStore::with_record(TRANSACTIONS_KEY, "[{"));
        assert!(controller.transactions().is_empty());

        let notice = controller.presenter().surface().current_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_failed_save_is_a_warning() {
        let mut backend = MemoryStore::new();
        backend.fail_writes(true);
        let mut controller = controller_with(backend);

        let err = controller.submit_form(&expense("Lunch", "20", "Food")).unwrap_err();
        assert!(matches!(err, FintrackError::PersistenceWrite(_)));
        assert_eq!(controller.transactions().len(), 1);
        assert_eq!(controller.presenter().surface().totals().expense, "R$ 20.00");

        let notice = controller.presenter().surface().current_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let mut controller = controller();
        controller
            .submit_form(&income("A", "1000000000000", "x"))
            .unwrap();

        let err = controller
            .submit_form(&income("B", "50000000000000000", "x"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.transactions().len(), 1);
        assert_eq!(
            controller.presenter().surface().totals().income,
            "R$ 1000000000000.00"
        );
    }

    #[test]
    fn test_exhausted_ids_keep_form() {
        let raw = r#"[{"id":18446744073709551615,"description":"Max","amount":1,"category":"c"},
                      {"id":18446744073709551614,"description":"Big","amount":1,"category":"c"}]"#;
        let mut controller = controller_with(MemoryStore::with_record(TRANSACTIONS_KEY, raw));
        controller.submit_form(&income("Last", "1", "c")).unwrap();

        let form = income("Too many", "1", "c");
        controller.presenter_mut().surface_mut().fill_form(&form);
        let err = controller.submit().unwrap_err();

        assert!(matches!(err, FintrackError::IdsExhausted(_)));
        assert_eq!(controller.presenter().surface().form(), form);
        assert_eq!(controller.transactions().len(), 2);
    }

    #[test]
    fn test_only_one_chart_instance_lives() {
        let mut controller = controller();
        for i in 1..=5 {
            controller
                .submit_form(&expense("Item", &i.to_string(), "Misc"))
                .unwrap();
        }
        assert_eq!(controller.presenter().charts().live_count(), 1);
    }
}
