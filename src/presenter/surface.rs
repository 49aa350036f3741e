//! Rendering surface abstraction
//!
//! The core only needs to read and clear the entry form, replace the history
//! rows, set the summary fields, switch panel visibility and show notices.

use crate::controller::{FormInput, Panels};
use crate::models::{TransactionId, TransactionKind};

/// One row of the history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Id passed back by the row's delete control
    pub id: TransactionId,
    pub description: String,
    pub category: String,
    /// Formatted absolute amount
    pub amount: String,
    /// Decides the row styling
    pub kind: TransactionKind,
}

/// Formatted summary fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalsView {
    pub balance: String,
    pub income: String,
    pub expense: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    /// Blocks until acknowledged
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Where the tracker is drawn
pub trait RenderSurface {
    /// Current values of the entry form
    fn form(&self) -> FormInput;

    /// Clear the entry fields and reset the selector to income
    fn reset_form(&mut self);

    /// Replace every history row
    fn set_rows(&mut self, rows: Vec<ListRow>);

    fn set_totals(&mut self, totals: TotalsView);

    fn set_panels(&mut self, panels: Panels);

    fn notify(&mut self, notice: Notice);
}
