//! Transaction history panel

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionKind;
use crate::presenter::UNCATEGORIZED_LABEL;
use crate::tui::surface::TuiSurface;

pub fn render(frame: &mut Frame, surface: &TuiSurface, area: Rect) {
    let block = Block::default()
        .title(" History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(" ↑/↓ select  Ctrl-d delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if surface.rows().is_empty() {
        let text = Paragraph::new("No transactions yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // Id
        Constraint::Min(20),    // Description
        Constraint::Length(16), // Category
        Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = surface
        .rows()
        .iter()
        .map(|row| {
            let (sign, color) = match row.kind {
                TransactionKind::Income => ("+", Color::Green),
                TransactionKind::Expense => ("-", Color::Red),
            };
            let category = if row.category.is_empty() {
                UNCATEGORIZED_LABEL
            } else {
                row.category.as_str()
            };

            Row::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(row.description.clone()),
                Cell::from(category.to_string()),
                Cell::from(format!("{} {}", sign, row.amount)),
            ])
            .style(Style::default().fg(color))
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(surface.selected_index());

    frame.render_stateful_widget(table, area, &mut state);
}
