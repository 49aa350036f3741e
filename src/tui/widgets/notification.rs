//! Notification widget
//!
//! Warnings and info messages fade out on their own. Errors stay on screen
//! until the user acknowledges them.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presenter::{Notice, NoticeLevel};

const TOAST_DURATION: Duration = Duration::from_secs(4);

fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Blue,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

fn level_title(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => " i Info ",
        NoticeLevel::Warning => " ! Warning ",
        NoticeLevel::Error => " x Error ",
    }
}

/// A notice with the time it was raised
#[derive(Debug, Clone)]
pub struct Notification {
    pub notice: Notice,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
        }
    }

    /// Errors must be dismissed explicitly
    pub fn is_blocking(&self) -> bool {
        self.notice.level == NoticeLevel::Error
    }

    pub fn is_expired(&self) -> bool {
        !self.is_blocking() && self.created_at.elapsed() >= TOAST_DURATION
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let level = self.notification.notice.level;
        let color = level_color(level);

        Clear.render(area, buf);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(level_title(level))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        if self.notification.is_blocking() {
            block = block.title_bottom(" Enter to dismiss ");
        }

        Paragraph::new(self.notification.notice.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notices waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notifications.push(Notification::new(notice));
    }

    /// Drop toasts whose time is up
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Remove the notice on screen
    pub fn dismiss(&mut self) -> Option<Notification> {
        if self.notifications.is_empty() {
            None
        } else {
            Some(self.notifications.remove(0))
        }
    }

    /// Whether the notice on screen waits for acknowledgement
    pub fn is_blocking(&self) -> bool {
        self.current().is_some_and(Notification::is_blocking)
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
