//! Tokio runtime spawner implementation.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::core::{SimError, Spawn};

/// Dropping the last guard lets the owning thread shut its runtime down.
struct RuntimeGuard {
    _shutdown: oneshot::Sender<()>,
}

/// Tokio-based spawner that runs completion timers on a tokio runtime.
///
/// Holds a runtime handle, so units can be submitted from threads that are
/// not themselves inside the runtime (a GUI thread, for instance).
#[derive(Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
    _guard: Option<Arc<RuntimeGuard>>,
}

impl TokioSpawner {
    /// Create a spawner from an existing runtime handle.
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            _guard: None,
        }
    }

    /// Create a spawner backed by its own multi-threaded runtime.
    ///
    /// The runtime is parked on a dedicated thread and shut down there once
    /// every clone of the spawner is gone, so dropping the last clone from
    /// inside a timer task is safe.
    pub fn with_worker_threads(worker_threads: usize) -> Result<Self, SimError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("memsim-timer")
            .enable_all()
            .build()
            .map_err(|e| SimError::Spawn(e.to_string()))?;
        let handle = runtime.handle().clone();

        let (tx, rx) = oneshot::channel::<()>();
        std::thread::Builder::new()
            .name("memsim-runtime".into())
            .spawn(move || {
                let _ = runtime.block_on(rx);
                tracing::debug!("spawner runtime shutting down");
            })
            .map_err(|e| SimError::Spawn(e.to_string()))?;

        Ok(Self {
            handle,
            _guard: Some(Arc::new(RuntimeGuard { _shutdown: tx })),
        })
    }

    /// Own runtime sized to the machine's CPU count.
    pub fn multi_thread() -> Result<Self, SimError> {
        Self::with_worker_threads(num_cpus::get())
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
