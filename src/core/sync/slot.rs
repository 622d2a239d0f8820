/*!
 * Announcement Slot
 * Single-slot, overwrite-on-publish channel built on tokio's watch
 *
 * Invariants:
 * - At most one undelivered value is buffered
 * - A publish discards any undelivered previous value (last writer wins)
 * - Publishing never waits for the consumer
 * - The consumer blocks only on its first read; every later read is a
 *   non-blocking "newest if changed" check
 */

use crate::core::errors::RecvError;
use tokio::sync::watch;

/// Producer half of the announcement slot
#[derive(Debug)]
pub struct Publisher<T> {
    tx: watch::Sender<Option<T>>,
}

/// Consumer half of the announcement slot
#[derive(Debug)]
pub struct Subscriber<T> {
    rx: watch::Receiver<Option<T>>,
}

/// Create a connected publisher/subscriber pair with an empty slot
pub fn channel<T: Clone>() -> (Publisher<T>, Subscriber<T>) {
    let (tx, rx) = watch::channel(None);
    (Publisher { tx }, Subscriber { rx })
}

impl<T: Clone> Publisher<T> {
    /// Publish a new value, overwriting any undelivered previous one.
    ///
    /// Publishing the same value twice still counts as a new announcement:
    /// the subscriber observes every publish that is not itself
    /// overwritten before being read.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(Some(value));
    }
}

impl<T: Clone> Subscriber<T> {
    /// Wait until a value has been published, then take the newest one.
    ///
    /// This is the startup read: it blocks until the very first
    /// announcement. Fails only if the publisher is gone before anything
    /// was published.
    pub async fn recv(&mut self) -> Result<T, RecvError> {
        loop {
            if let Some(value) = self.rx.borrow_and_update().clone() {
                return Ok(value);
            }
            self.rx.changed().await.map_err(|_| RecvError)?;
        }
    }

    /// Take the newest value if one was published since the last read.
    ///
    /// Never blocks. Returns `None` when nothing new has arrived or the
    /// publisher is gone; either way the caller keeps working with the
    /// value it already holds.
    pub fn try_latest(&mut self) -> Option<T> {
        match self.rx.has_changed() {
            Ok(true) => self.rx.borrow_and_update().clone(),
            _ => None,
        }
    }
}
