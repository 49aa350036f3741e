//! TUI Views module
//!
//! Summary, entry form, history, chart and status bar, plus the notice
//! overlay.

pub mod chart;
pub mod form;
pub mod history;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::controller::Panels;
use crate::storage::KeyValueStore;

use super::app::App;
use super::layout::{centered_rect, toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());
    let surface = app.surface();

    summary::render(frame, surface.totals(), layout.summary);
    form::render(frame, surface, layout.form);

    match surface.panels() {
        Panels::List => history::render(frame, surface, layout.content),
        Panels::Chart => chart::render(frame, app.charts().current(), layout.content),
        Panels::None => {}
    }

    status_bar::render(frame, surface, layout.status_bar);

    if let Some(notification) = surface.current_notification() {
        let area = if notification.is_blocking() {
            centered_rect(60, 30, frame.area())
        } else {
            toast_rect(50, 4, frame.area())
        };
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
