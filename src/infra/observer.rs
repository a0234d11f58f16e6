//! Ready-made state observers for presentation layers.
//!
//! - [`CountingObserver`]: counts notifications, handy for tests and metrics.
//! - [`WatchObserver`]: async consumers await `changed()` on a tokio watch channel.
//! - [`ChannelObserver`]: thread-polled consumers (GUI event loops) drain a channel.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::core::StateObserver;

/// Counts state-change notifications.
#[derive(Debug, Default)]
pub struct CountingObserver {
    count: AtomicU64,
}

impl CountingObserver {
    /// New counter at zero.
    pub const fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Notifications received so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl StateObserver for CountingObserver {
    fn on_state_changed(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Publishes a monotonically increasing version on every notification.
///
/// Receivers only see the latest version, so bursts of changes collapse
/// into one wake-up; the receiver then re-reads the engine.
#[derive(Debug)]
pub struct WatchObserver {
    tx: watch::Sender<u64>,
}

impl WatchObserver {
    /// Create the observer and its first receiver.
    pub fn new() -> (Self, watch::Receiver<u64>) {
        let (tx, rx) = watch::channel(0);
        (Self { tx }, rx)
    }

    /// Additional receiver.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    /// Current version.
    pub fn version(&self) -> u64 {
        *self.tx.borrow()
    }
}

impl StateObserver for WatchObserver {
    fn on_state_changed(&self) {
        self.tx.send_modify(|v| *v += 1);
    }
}

/// Sends `()` on a crossbeam channel for every notification.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: crossbeam_channel::Sender<()>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ChannelObserver {
    /// Create an observer with an unbounded channel.
    pub fn unbounded() -> (Self, crossbeam_channel::Receiver<()>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StateObserver for ChannelObserver {
    fn on_state_changed(&self) {
        if self.tx.send(()).is_err() {
            tracing::trace!("state observer receiver dropped");
        }
    }
}
