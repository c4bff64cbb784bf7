//! Scroll behaviour shared by any host scroll container.
//!
//! - `offset` - content offsets and frame-origin normalization
//! - `direction` - coarse direction classification
//! - `timer` - cancelable one-shot timer
//! - `debounce` - scroll-end debouncing
//! - `observable` - subscribable value slots
//! - `state` - previous/current offset tracking
//! - `proxy` - programmatic scroll requests
//! - `view` - the scroll view wiring all of the above together

mod debounce;
mod direction;
mod observable;
mod offset;
mod proxy;
mod state;
mod timer;
mod view;

pub use debounce::{DEFAULT_WINDOW, Debouncer};
pub use direction::Direction;
pub use observable::{Observable, SubscriptionId};
pub use offset::{Offset, reduce};
pub use proxy::{ScrollProxy, ScrollTarget};
pub use state::ScrollState;
pub use timer::{Fired, OneShotTimer};
pub use view::{Axes, ScrollEnded, ScrollView, ScrollViewOptions};
