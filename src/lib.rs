//! Derived scroll signals for host scroll containers: content offset, coarse
//! scroll direction and a debounced scroll-ended event.

pub mod config;
pub mod error;
pub mod log;
pub mod scroll;

pub use error::{ConfigError, Result, ScrollsenseError};
pub use scroll::{Axes, Direction, Offset, ScrollEnded, ScrollTarget, ScrollView, ScrollViewOptions};
