//! Scroll-end debouncing.
//!
//! Collapses a burst of offset updates into a single settled value once the
//! input has been quiet for the debounce window.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut debouncer = Debouncer::new(Duration::from_millis(200));
//!
//! // In event loop:
//! tokio::select! {
//!     offset = next_offset() => debouncer.push(offset),
//!     Some(settled) = debouncer.settled() => on_scroll_ended(settled),
//! }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;

use super::timer::{Fired, OneShotTimer};

/// Default quiet period before a scroll is considered ended.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(200);

/// Debounces a stream of values, emitting only the last one after a quiet
/// period.
///
/// Each debouncer owns its own timer; instances never share state.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    timer: OneShotTimer<T>,
    rx: mpsc::UnboundedReceiver<Fired<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            window,
            timer: OneShotTimer::new(tx),
            rx,
        }
    }

    pub fn with_default_window() -> Self {
        Self::new(DEFAULT_WINDOW)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Feed a new value, restarting the quiet window with it as payload.
    pub fn push(&mut self, value: T) {
        self.timer.start(self.window, value);
    }

    /// Drop the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Whether a value is waiting for the window to elapse.
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Wait for the next settled value.
    ///
    /// Pends forever while idle, so it is safe to poll from a `select!` loop
    /// on every iteration. Cancel-safe: dropping the future loses nothing.
    pub async fn settled(&mut self) -> Option<T> {
        loop {
            let fired = self.rx.recv().await?;
            if self.timer.complete(fired.generation) {
                return Some(fired.payload);
            }
            // Superseded by a later push or a cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, sleep};

    fn assert_elapsed(start: Instant, ms: u64) {
        let elapsed = start.elapsed();
        let expected = Duration::from_millis(ms);
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "elapsed {elapsed:?}, expected {expected:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_last_value_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.push('A');
        sleep(Duration::from_millis(50)).await;
        debouncer.push('B');
        sleep(Duration::from_millis(50)).await;
        debouncer.push('C');

        assert_eq!(debouncer.settled().await, Some('C'));
        assert_elapsed(start, 300);
        assert!(!debouncer.is_pending());

        // No second emission for the same burst
        let again = tokio::time::timeout(Duration::from_secs(5), debouncer.settled()).await;
        assert!(again.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_value_emits_after_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::with_default_window();

        debouncer.push(7);

        assert_eq!(debouncer.settled().await, Some(7));
        assert_elapsed(start, 200);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.push(1);
        sleep(Duration::from_millis(150)).await;
        debouncer.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), debouncer.settled()).await;
        assert!(result.is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_burst_after_settle() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.push(1);
        assert_eq!(debouncer.settled().await, Some(1));

        debouncer.push(2);
        debouncer.push(3);
        assert_eq!(debouncer.settled().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_delivery_is_ignored() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.push(1);
        // Let the first timer fire into the channel without consuming it
        sleep(Duration::from_millis(150)).await;
        debouncer.push(2);

        let start = Instant::now();
        assert_eq!(debouncer.settled().await, Some(2));
        assert_elapsed(start, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_are_independent() {
        let mut a = Debouncer::new(Duration::from_millis(100));
        let mut b = Debouncer::new(Duration::from_millis(300));

        a.push("a");
        b.push("b");
        drop(b);

        assert_eq!(a.settled().await, Some("a"));
    }
}
