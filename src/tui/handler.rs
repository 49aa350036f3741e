//! Event handler for the TUI
//!
//! Routes key presses to the entry form, the history list, the panel
//! toggles or the notice on screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::storage::KeyValueStore;

use super::app::App;
use super::event::Event;
use super::surface::FormField;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.surface_mut().tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // An error has to be acknowledged before anything else
    if app.surface().has_blocking_notice() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.surface_mut().dismiss_notice();
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => {
            if let Err(e) = app.controller.submit() {
                debug!(error = %e, "submit did not complete");
            }
        }
        KeyCode::Tab => app.surface_mut().focus_next(),
        KeyCode::BackTab => app.surface_mut().focus_prev(),
        KeyCode::F(2) => app.controller.toggle_list(),
        KeyCode::F(3) => app.controller.toggle_chart(),
        KeyCode::Char('l') if ctrl => app.controller.toggle_list(),
        KeyCode::Char('g') if ctrl => app.controller.toggle_chart(),
        KeyCode::Char('d') if ctrl => delete_selected(app),
        KeyCode::Up if app.controller.panels().list_visible() => app.surface_mut().select_prev(),
        KeyCode::Down if app.controller.panels().list_visible() => app.surface_mut().select_next(),
        _ if ctrl => {}
        _ => handle_form_key(app, key),
    }

    Ok(())
}

/// Delete the highlighted history row
fn delete_selected<S: KeyValueStore>(app: &mut App<S>) {
    if !app.controller.panels().list_visible() {
        return;
    }
    if let Some(id) = app.surface().selected_id() {
        if let Err(e) = app.controller.delete(id) {
            debug!(error = %e, %id, "delete did not complete");
        }
    }
}

/// Editing keys for the focused form field
fn handle_form_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    let surface = app.surface_mut();

    if surface.focused == FormField::Kind {
        if matches!(
            key.code,
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
        ) {
            surface.toggle_kind();
        }
        return;
    }

    let Some(input) = surface.focused_input_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
