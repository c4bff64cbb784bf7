//! Terminal rendering for the demo host.

pub mod theme;
pub mod ui;
