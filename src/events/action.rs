//! Action enum for decoupling input handling from state changes.

use scrollsense::scroll::ScrollTarget;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Scroll by whole columns (`dx`) and rows (`dy`)
    ScrollBy { dx: i32, dy: i32 },
    /// Programmatic scroll through the content's proxy
    ScrollTo(ScrollTarget),
    /// No action
    None,
}
