//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use scrollsense::scroll::ScrollTarget;

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    let page = app.viewport.height.max(1) as i32;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollBy { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollBy { dx: 0, dy: 1 },
        KeyCode::Left | KeyCode::Char('h') => Action::ScrollBy { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('l') => Action::ScrollBy { dx: 1, dy: 0 },
        KeyCode::PageUp => Action::ScrollBy { dx: 0, dy: -page },
        KeyCode::PageDown | KeyCode::Char(' ') => Action::ScrollBy { dx: 0, dy: page },
        KeyCode::Home | KeyCode::Char('g') => Action::ScrollTo(ScrollTarget::Top),
        KeyCode::End | KeyCode::Char('G') => Action::ScrollTo(ScrollTarget::Bottom),
        _ => Action::None,
    }
}
