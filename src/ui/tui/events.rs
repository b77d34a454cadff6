//! Event handling for the terminal frontend
//!
//! Maps keyboard and mouse input to state changes and controller events.
//! The key handlers are pure over [`TuiState`] so they can be tested
//! without a terminal.

use super::state::TuiState;
use crate::ui::traits::RosterEvent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling a single input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Keep the loop running (redraw)
    Continue,
    /// Report an event to the controller
    Emit(RosterEvent),
    /// No action taken
    Ignored,
}

/// Handle a key press against the current state
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Session end: ESC keeps the shortlist, Ctrl+C abandons it
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Emit(RosterEvent::Cancel),
        (KeyCode::Esc, _) => EventResult::Emit(RosterEvent::Accept),

        // Toggle the row under the cursor
        (KeyCode::Enter, _) => state.current_row().map_or(EventResult::Ignored, |row| {
            EventResult::Emit(RosterEvent::Toggle(row.name.clone()))
        }),

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing; every change is reported so the engine refilters
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Emit(RosterEvent::Search(state.query.clone()))
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::Emit(RosterEvent::Search(state.query.clone()))
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::Emit(RosterEvent::Search(state.query.clone()))
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_clear();
                EventResult::Emit(RosterEvent::Search(String::new()))
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle a mouse event
fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for input and handle it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut TuiState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
