//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, and installs a panic hook
//! that puts the terminal back before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::Settings;
use crate::storage::{JsonFileStore, TransactionStore};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the tracker until the user quits
pub fn run_tui(store: TransactionStore<JsonFileStore>, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(store, settings));
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, mut app: App<JsonFileStore>) -> Result<()> {
    let events = EventHandler::default();
    info!("tui started");

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?)?;
    }

    info!(count = app.controller.transactions().len(), "tui closed");
    Ok(())
}
