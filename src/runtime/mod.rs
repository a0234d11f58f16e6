//! Runtime adapters and the presentation-facing API surface.

pub mod api;
pub mod tokio_spawner;

pub use api::{snapshot, submit, EngineSnapshot, SubmitRequest, SubmitResponse};
pub use tokio_spawner::TokioSpawner;
