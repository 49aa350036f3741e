//! Terminal rendering surface
//!
//! Holds everything the views draw: the entry form, the history rows, the
//! summary fields, panel visibility and pending notices.

use crate::controller::{FormInput, Panels};
use crate::models::{TransactionId, TransactionKind};
use crate::presenter::{ListRow, Notice, RenderSurface, TotalsView};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Fields of the entry form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
    Category,
    Kind,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Kind,
            Self::Kind => Self::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Kind => Self::Category,
        }
    }
}

#[derive(Debug)]
pub struct TuiSurface {
    pub description: TextInput,
    pub amount: TextInput,
    pub category: TextInput,
    pub kind: TransactionKind,
    pub focused: FormField,
    rows: Vec<ListRow>,
    selected_row: usize,
    totals: TotalsView,
    panels: Panels,
    notifications: NotificationQueue,
}

impl Default for TuiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiSurface {
    pub fn new() -> Self {
        let mut surface = Self {
            description: TextInput::new()
                .label("Description")
                .placeholder("e.g. Salary"),
            amount: TextInput::new().label("Amount").placeholder("0.00"),
            category: TextInput::new().label("Category").placeholder("e.g. Food"),
            kind: TransactionKind::Income,
            focused: FormField::Description,
            rows: Vec::new(),
            selected_row: 0,
            totals: TotalsView::default(),
            panels: Panels::default(),
            notifications: NotificationQueue::new(),
        };
        surface.sync_focus();
        surface
    }

    /// Put the values of `form` into the fields
    pub fn fill_form(&mut self, form: &FormInput) {
        self.description.set_content(form.description.as_str());
        self.amount.set_content(form.amount.as_str());
        self.category.set_content(form.category.as_str());
        self.kind = form.kind;
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn totals(&self) -> &TotalsView {
        &self.totals
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    /// The notice on screen, if any
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notifications.current().map(|n| &n.notice)
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Whether an error is waiting to be acknowledged
    pub fn has_blocking_notice(&self) -> bool {
        self.notifications.is_blocking()
    }

    pub fn dismiss_notice(&mut self) {
        self.notifications.dismiss();
    }

    /// Drop toasts that have been on screen long enough
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
        self.sync_focus();
    }

    /// The text field with focus, `None` on the selector
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Category => Some(&mut self.category),
            FormField::Kind => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.selected_row)
        }
    }

    /// Id of the highlighted history row
    pub fn selected_id(&self) -> Option<TransactionId> {
        self.rows.get(self.selected_row).map(|row| row.id)
    }

    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.rows.len() {
            self.selected_row += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn sync_focus(&mut self) {
        self.description.focused = self.focused == FormField::Description;
        self.amount.focused = self.focused == FormField::Amount;
        self.category.focused = self.focused == FormField::Category;
    }
}

impl RenderSurface for TuiSurface {
    fn form(&self) -> FormInput {
        FormInput::new(
            self.description.value(),
            self.amount.value(),
            self.category.value(),
            self.kind,
        )
    }

    fn reset_form(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
        self.kind = TransactionKind::Income;
        self.focused = FormField::Description;
        self.sync_focus();
    }

    fn set_rows(&mut self, rows: Vec<ListRow>) {
        self.rows = rows;
        if self.selected_row >= self.rows.len() {
            self.selected_row = self.rows.len().saturating_sub(1);
        }
    }

    fn set_totals(&mut self, totals: TotalsView) {
        self.totals = totals;
    }

    fn set_panels(&mut self, panels: Panels) {
        self.panels = panels;
    }

    fn notify(&mut self, notice: Notice) {
        self.notifications.push(notice);
    }
}
