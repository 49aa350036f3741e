//! Status bar view
//!
//! Key hints for the current focus

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::surface::{FormField, TuiSurface};

pub fn render(frame: &mut Frame, surface: &TuiSurface, area: Rect) {
    let field_hint = match surface.focused {
        FormField::Kind => "Space:income/expense",
        _ => "type to edit",
    };

    let hints = [
        ("Tab", "next field"),
        ("Enter", "add"),
        ("F2", "history"),
        ("F3", "chart"),
        ("Esc", "quit"),
    ];

    let mut spans = vec![Span::styled(
        format!(" {} ", field_hint),
        Style::default().fg(Color::Yellow),
    )];
    for (key, action) in hints {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(":{} ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
