//! Programmatic scroll requests.

use tokio::sync::mpsc;

use super::offset::Offset;

/// Where a programmatic scroll should land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    Top,
    Bottom,
    /// An absolute content offset
    Offset(Offset),
    /// A content row, resolved by the host's layout
    Line(usize),
}

/// Handle given to content so it can ask its scroll view to move.
///
/// Requests queue up until the host drains them with
/// [`ScrollView::take_scroll_requests`](super::ScrollView::take_scroll_requests).
#[derive(Debug, Clone)]
pub struct ScrollProxy {
    tx: mpsc::UnboundedSender<ScrollTarget>,
}

impl ScrollProxy {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<ScrollTarget>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Ask the scroll view to move to `target`.
    ///
    /// Returns false once the scroll view has been dropped.
    pub fn scroll_to(&self, target: ScrollTarget) -> bool {
        self.tx.send(target).is_ok()
    }
}
