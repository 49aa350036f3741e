//! Expense distribution panel
//!
//! Terminals can't draw a doughnut, so each category gets a horizontal bar
//! in its palette color, labelled with its name and share.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::presenter::chart::parse_hex_color;
use crate::presenter::ChartConfig;

pub fn render(frame: &mut Frame, config: Option<&ChartConfig>, area: Rect) {
    let title = config.map(|c| c.title.as_str()).unwrap_or_default();
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let config = match config {
        Some(config) if !config.is_empty() => config,
        _ => {
            let text = Paragraph::new("No expenses to chart.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, area);
            return;
        }
    };

    frame.render_widget(bars(config).block(block), area);
}

fn slice_color(config: &ChartConfig, index: usize) -> Color {
    parse_hex_color(config.color_for(index))
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

/// One bar per category, labelled with its name and share
///
/// The label carries the legend, so every category stays identifiable even
/// after the palette wraps around.
fn bars(config: &ChartConfig) -> BarChart<'_> {
    let bars: Vec<Bar> = config
        .labels
        .iter()
        .zip(&config.data)
        .zip(&config.shares)
        .enumerate()
        .map(|(i, ((label, value), share))| {
            let color = slice_color(config, i);
            Bar::default()
                .label(Line::from(vec![
                    Span::styled("■ ", Style::default().fg(color)),
                    Span::raw(label.as_str()),
                    Span::styled(format!(" {:.1}%", share), Style::default().fg(Color::DarkGray)),
                ]))
                // BarChart wants integers; cents keep the proportions exact
                .value((value * 100.0).round() as u64)
                .text_value(format!("{:.2}", value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    BarChart::default()
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
}
