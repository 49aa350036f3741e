//! Summary strip: balance, income and expense

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::presenter::TotalsView;

pub fn render(frame: &mut Frame, totals: &TotalsView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let balance_color = if totals.balance.starts_with('-') {
        Color::Red
    } else {
        Color::Cyan
    };

    render_field(frame, "Balance", &totals.balance, balance_color, columns[0]);
    render_field(frame, "Income", &totals.income, Color::Green, columns[1]);
    render_field(frame, "Expenses", &totals.expense, Color::Red, columns[2]);
}

fn render_field(frame: &mut Frame, title: &str, value: &str, color: Color, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
