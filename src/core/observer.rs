//! State-change notification seam for the presentation layer.

/// Receives a payload-free "state changed" signal after every admission,
/// queue append, and completion.
///
/// The engine never holds its state lock while calling this, so
/// implementations may immediately read back `get_available`,
/// `list_running`, and `list_waiting`.
pub trait StateObserver: Send + Sync {
    /// Called after the engine's state changed.
    fn on_state_changed(&self);
}

impl<F> StateObserver for F
where
    F: Fn() + Send + Sync,
{
    fn on_state_changed(&self) {
        self();
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn on_state_changed(&self) {}
}
