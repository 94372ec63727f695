//! Debounced delivery of input events.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces bursts of events so that only the last value in a quiet window
/// is delivered.
///
/// Each [`submit`](Debouncer::submit) cancels the previously scheduled
/// delivery and schedules a new one after the configured delay; a value is
/// delivered to the channel only once a full quiet window has passed without
/// another submission. Intermediate values are never delivered.
///
/// Scheduling uses the tokio timer, so tests can drive it deterministically
/// with a paused clock.
///
/// # Example
///
/// ```ignore
/// let (mut debouncer, mut rx) = Debouncer::channel(Duration::from_millis(500));
///
/// debouncer.submit("p".to_string());
/// debouncer.submit("pi".to_string());
/// debouncer.submit("pikachu".to_string());
///
/// // After 500ms of quiet, only "pikachu" arrives.
/// assert_eq!(rx.recv().await, Some("pikachu".to_string()));
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer delivering into an existing channel.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Create a debouncer together with the receiving end of its channel.
    pub fn channel(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(delay, tx), rx)
    }

    /// Submit a value, displacing any value still waiting out its quiet
    /// window.
    pub fn submit(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Cancel the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Check whether a delivery is still waiting out its quiet window.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
