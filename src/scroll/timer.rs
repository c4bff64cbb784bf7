//! Cancelable one-shot timer on the tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A payload delivered by a fired timer, tagged with the generation that
/// armed it.
#[derive(Debug)]
pub struct Fired<T> {
    pub generation: u64,
    pub payload: T,
}

/// A single deferred delivery that can be cancelled before it fires.
///
/// Starting the timer again cancels the previous delivery. Dropping the timer
/// cancels any pending delivery.
#[derive(Debug)]
pub struct OneShotTimer<T> {
    tx: mpsc::UnboundedSender<Fired<T>>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl<T: Send + 'static> OneShotTimer<T> {
    /// Create a timer that delivers into `tx`.
    pub fn new(tx: mpsc::UnboundedSender<Fired<T>>) -> Self {
        Self {
            tx,
            handle: None,
            generation: 0,
        }
    }

    /// Arm the timer to deliver `payload` after `delay`, replacing any pending
    /// delivery. Returns the generation of the new delivery.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, delay: Duration, payload: T) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner was torn down
            let _ = tx.send(Fired { generation, payload });
        }));

        generation
    }

    /// Cancel the pending delivery, if any.
    ///
    /// Bumps the generation so a delivery already sitting in the channel is
    /// recognizable as stale.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            self.generation += 1;
        }
    }

    /// Whether `generation` is the live delivery.
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    /// Mark the live delivery as consumed.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.handle = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl<T> Drop for OneShotTimer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
