//! API-facing request/response models for a presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{AdmissionEngine, Spawn, Unit, UnitStatus};

pub use crate::core::EngineSnapshot;

/// Request to create a unit, as read from a form or a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Descriptive label; blank means auto-generated.
    #[serde(default)]
    pub label: String,
    /// Capacity requested.
    pub demand: i64,
    /// Time units to hold the capacity.
    pub duration: i64,
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitResponse {
    /// Unit created and either running or waiting.
    Accepted {
        /// The created unit.
        unit: Unit,
        /// Where it landed.
        status: UnitStatus,
    },
    /// Request refused; nothing changed.
    Rejected {
        /// Human-readable reason.
        reason: String,
    },
}

/// Submit a request to the engine and map the outcome to a response model.
pub fn submit<S>(engine: &AdmissionEngine<S>, req: &SubmitRequest) -> SubmitResponse
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    match engine.submit_request(&req.label, req.demand, req.duration) {
        Ok(submission) => SubmitResponse::Accepted {
            unit: submission.unit,
            status: submission.status,
        },
        Err(e) => SubmitResponse::Rejected {
            reason: e.to_string(),
        },
    }
}

/// Current engine state for rendering.
pub fn snapshot<S>(engine: &AdmissionEngine<S>) -> EngineSnapshot {
    engine.snapshot()
}
