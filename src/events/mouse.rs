//! Mouse event handling.

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

use super::Action;

/// Rows or columns moved per wheel notch.
const WHEEL_STEP: i32 = 3;

/// Handle mouse events and return the appropriate action.
///
/// Shift turns the vertical wheel into horizontal scrolling, for mice and
/// terminals without a horizontal wheel.
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);

    match mouse.kind {
        MouseEventKind::ScrollUp if shift => Action::ScrollBy { dx: -WHEEL_STEP, dy: 0 },
        MouseEventKind::ScrollDown if shift => Action::ScrollBy { dx: WHEEL_STEP, dy: 0 },
        MouseEventKind::ScrollUp => Action::ScrollBy { dx: 0, dy: -WHEEL_STEP },
        MouseEventKind::ScrollDown => Action::ScrollBy { dx: 0, dy: WHEEL_STEP },
        MouseEventKind::ScrollLeft => Action::ScrollBy { dx: -WHEEL_STEP, dy: 0 },
        MouseEventKind::ScrollRight => Action::ScrollBy { dx: WHEEL_STEP, dy: 0 },
        _ => Action::None,
    }
}
