//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into Actions, which the App applies to the
//! scroll view.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
