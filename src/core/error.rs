//! Error types for simulator operations.

use thiserror::Error;

/// Errors produced by simulator components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Request carried a non-positive demand or duration.
    #[error("invalid parameters: demand={demand}, duration={duration}")]
    InvalidRequest {
        /// Demand as supplied by the caller.
        demand: i64,
        /// Duration as supplied by the caller.
        duration: i64,
    },
    /// An accounting invariant was broken (double release, unknown unit, overflow).
    #[error("internal consistency violation: {0}")]
    ConsistencyViolation(String),
    /// Configuration failed parsing or validation.
    #[error("config error: {0}")]
    Config(String),
    /// Runtime for the completion tasks could not be created.
    #[error("spawn error: {0}")]
    Spawn(String),
}

impl SimError {
    /// Short stable label for logs.
    pub const fn as_label(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::ConsistencyViolation(_) => "consistency_violation",
            Self::Config(_) => "config",
            Self::Spawn(_) => "spawn",
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
