//! Transaction entry form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::surface::{FormField, TuiSurface};

pub fn render(frame: &mut Frame, surface: &TuiSurface, area: Rect) {
    let block = Block::default()
        .title(" New transaction ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(&surface.description, rows[0]);
    frame.render_widget(&surface.amount, rows[1]);
    frame.render_widget(&surface.category, rows[2]);
    frame.render_widget(kind_selector(surface), rows[3]);
}

fn kind_selector(surface: &TuiSurface) -> Paragraph<'static> {
    let focused = surface.focused == FormField::Kind;
    let option = |kind: TransactionKind, color: Color| {
        let selected = surface.kind == kind;
        let marker = if selected { "(•)" } else { "( )" };
        let mut style = Style::default().fg(if selected { color } else { Color::DarkGray });
        if selected && focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(format!("{} {}", marker, kind), style)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("Type", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        option(TransactionKind::Income, Color::Green),
        Span::raw("  "),
        option(TransactionKind::Expense, Color::Red),
    ]))
}
