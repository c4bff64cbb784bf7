//! Scroll view behaviour: offset tracking, direction and scroll-end events.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;

use crate::error::ConfigError;
use crate::log;

use super::debounce::{DEFAULT_WINDOW, Debouncer};
use super::direction::Direction;
use super::observable::{Observable, SubscriptionId};
use super::offset::{Offset, reduce};
use super::proxy::{ScrollProxy, ScrollTarget};
use super::state::ScrollState;

/// Which axes a scroll view can move along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axes {
    Vertical,
    Horizontal,
    #[default]
    Both,
}

impl Axes {
    pub fn horizontal(&self) -> bool {
        matches!(self, Axes::Horizontal | Axes::Both)
    }

    pub fn vertical(&self) -> bool {
        matches!(self, Axes::Vertical | Axes::Both)
    }

    /// Zero the components of `offset` along disabled axes.
    pub fn mask(&self, offset: Offset) -> Offset {
        Offset::new(
            if self.horizontal() { offset.x } else { 0.0 },
            if self.vertical() { offset.y } else { 0.0 },
        )
    }
}

impl FromStr for Axes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v" | "vertical" => Ok(Axes::Vertical),
            "h" | "horizontal" => Ok(Axes::Horizontal),
            "both" | "all" => Ok(Axes::Both),
            _ => Err(ConfigError::InvalidAxes(s.to_string())),
        }
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axes::Vertical => "vertical",
            Axes::Horizontal => "horizontal",
            Axes::Both => "both",
        })
    }
}

/// Per-instance scroll view settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewOptions {
    pub axes: Axes,
    /// Whether the host should draw scroll indicators
    pub shows_indicators: bool,
    /// Whether the host allows overscroll past the content edges
    pub bounces: bool,
    /// Quiet period before a scroll counts as ended
    pub debounce: Duration,
}

impl Default for ScrollViewOptions {
    fn default() -> Self {
        Self {
            axes: Axes::Both,
            shows_indicators: true,
            bounces: true,
            debounce: DEFAULT_WINDOW,
        }
    }
}

/// Emitted once per settled scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEnded {
    pub offset: Offset,
    pub direction: Direction,
}

type ScrollEndedHandler = Box<dyn FnMut(Offset, Direction)>;

/// Wraps a host scroll container and derives offset, direction and
/// scroll-ended signals from the raw offsets it reports.
///
/// The host forwards every offset change to [`handle_offset`](Self::handle_offset)
/// and polls [`next_scroll_end`](Self::next_scroll_end) from its event loop.
pub struct ScrollView<C> {
    options: ScrollViewOptions,
    state: ScrollState,
    offset: Observable<Offset>,
    direction: Observable<Direction>,
    debouncer: Debouncer<Offset>,
    on_scroll_ended: Option<ScrollEndedHandler>,
    proxy: ScrollProxy,
    requests: mpsc::UnboundedReceiver<ScrollTarget>,
    content: C,
    disposed: bool,
}

impl<C> ScrollView<C> {
    /// Create a scroll view, building its content with a handle for
    /// programmatic scrolling.
    pub fn new(options: ScrollViewOptions, content: impl FnOnce(&ScrollProxy) -> C) -> Self {
        let (proxy, requests) = ScrollProxy::channel();
        let content = content(&proxy);

        Self {
            options,
            state: ScrollState::new(),
            offset: Observable::new(Offset::ZERO),
            direction: Observable::new(Direction::Unknown),
            debouncer: Debouncer::new(options.debounce),
            on_scroll_ended: None,
            proxy,
            requests,
            content,
            disposed: false,
        }
    }

    pub fn options(&self) -> &ScrollViewOptions {
        &self.options
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn proxy(&self) -> ScrollProxy {
        self.proxy.clone()
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn offset(&self) -> Offset {
        *self.offset.get()
    }

    pub fn direction(&self) -> Direction {
        *self.direction.get()
    }

    /// Whether offsets are still arriving within the debounce window.
    pub fn is_scrolling(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Register the scroll-ended handler, replacing any previous one.
    pub fn on_scroll_ended(&mut self, handler: impl FnMut(Offset, Direction) + 'static) {
        self.on_scroll_ended = Some(Box::new(handler));
    }

    pub fn subscribe_offset(&mut self, callback: impl FnMut(&Offset) + 'static) -> SubscriptionId {
        self.offset.subscribe(callback)
    }

    pub fn subscribe_direction(
        &mut self,
        callback: impl FnMut(&Direction) + 'static,
    ) -> SubscriptionId {
        self.direction.subscribe(callback)
    }

    /// Remove an offset or direction subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.offset.unsubscribe(id) || self.direction.unsubscribe(id)
    }

    /// Feed a raw offset from the host container. Returns the new direction.
    ///
    /// Ignored after [`dispose`](Self::dispose).
    pub fn handle_offset(&mut self, raw: Offset) -> Direction {
        if self.disposed {
            return self.state.direction();
        }

        let offset = self.options.axes.mask(raw);
        let direction = self.state.update(offset);

        self.offset.set(offset);
        self.direction.set(direction);
        self.debouncer.push(offset);

        direction
    }

    /// Feed viewport and content frame origins measured in the same outer
    /// coordinate space.
    pub fn handle_frame(&mut self, viewport_origin: Offset, content_origin: Offset) -> Direction {
        self.handle_offset(reduce(viewport_origin, content_origin))
    }

    /// Wait for the current scroll to settle, then notify the handler.
    ///
    /// The reported direction is the one current when the debounce window
    /// elapses. Returns `None` once disposed.
    pub async fn next_scroll_end(&mut self) -> Option<ScrollEnded> {
        if self.disposed {
            return None;
        }

        let offset = self.debouncer.settled().await?;
        let event = ScrollEnded {
            offset,
            direction: self.state.direction(),
        };

        log::log_scroll_end(event.offset, event.direction);
        if let Some(handler) = self.on_scroll_ended.as_mut() {
            handler(event.offset, event.direction);
        }

        Some(event)
    }

    /// Drain programmatic scroll requests queued through the proxy.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollTarget> {
        let mut targets = vec![];
        while let Ok(target) = self.requests.try_recv() {
            targets.push(target);
        }
        targets
    }

    /// Tear down: cancel the pending scroll-end and drop all callbacks.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.debouncer.cancel();
        self.on_scroll_ended = None;
        self.offset.clear_subscribers();
        self.direction.clear_subscribers();
        log::log("Scroll view disposed");
    }
}

impl<C: fmt::Debug> fmt::Debug for ScrollView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollView")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("scrolling", &self.is_scrolling())
            .field("content", &self.content)
            .field("disposed", &self.disposed)
            .finish()
    }
}
