//! Completion scheduling.
//!
//! One lightweight task per admitted unit sleeps out the unit's duration and
//! then fires its completion callback exactly once. Timers are independent
//! of each other and never hold engine state while suspended.

use std::future::Future;
use std::time::Duration;

use crate::core::UnitId;

/// Abstraction for spawning background work on a runtime.
pub trait Spawn {
    /// Spawn a future that runs to completion in the background.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Arms per-unit completion timers.
#[derive(Debug, Clone)]
pub struct CompletionScheduler<S> {
    spawner: S,
    time_unit_ms: u64,
}

impl<S> CompletionScheduler<S>
where
    S: Spawn,
{
    /// Create a scheduler where one duration unit lasts `time_unit_ms`.
    pub const fn new(spawner: S, time_unit_ms: u64) -> Self {
        Self {
            spawner,
            time_unit_ms,
        }
    }

    /// Wall-clock length of `duration` simulated time units.
    pub const fn wait_for(&self, duration: u64) -> Duration {
        Duration::from_millis(self.time_unit_ms.saturating_mul(duration))
    }

    /// Arm a timer that runs `on_expiry` once after `duration` time units.
    pub fn schedule<F>(&self, unit_id: UnitId, duration: u64, on_expiry: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait_for(duration);
        tracing::debug!(
            unit_id,
            wait_ms = self.time_unit_ms.saturating_mul(duration),
            "completion timer armed"
        );
        self.spawner.spawn(async move {
            tokio::time::sleep(wait).await;
            tracing::debug!(unit_id, "completion timer fired");
            on_expiry();
        });
    }
}
