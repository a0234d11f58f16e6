//! Audit sink implementations.
//!
//! Records unit lifecycle transitions so a presentation layer can show a
//! history next to the current state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Unit, UnitId};
use crate::util::clock::now_ms;

/// Lifecycle transition being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Request accepted and a unit created.
    Submit,
    /// Request refused before a unit existed.
    Reject,
    /// Admitted straight from submission.
    Start,
    /// Parked in the waiting queue.
    Enqueue,
    /// Moved from the waiting queue to running.
    Promote,
    /// Duration elapsed and capacity returned.
    Complete,
}

impl AuditAction {
    /// Lowercase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reject => "reject",
            Self::Start => "start",
            Self::Enqueue => "enqueue",
            Self::Promote => "promote",
            Self::Complete => "complete",
        }
    }
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related unit, absent for rejected requests.
    pub unit_id: Option<UnitId>,
    /// Unit label or the rejected request's label.
    pub label: String,
    /// Transition recorded.
    pub action: AuditAction,
    /// Demand involved.
    pub demand: i64,
    /// Available capacity right after the transition.
    pub available_after: u64,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink keeping the newest `max_events`.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event for an existing unit.
pub fn build_audit_event(unit: &Unit, action: AuditAction, available_after: u64) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        unit_id: Some(unit.id()),
        label: unit.label().to_string(),
        action,
        demand: i64::try_from(unit.demand()).unwrap_or(i64::MAX),
        available_after,
        created_at_ms: now_ms(),
    }
}

/// Helper to build an audit event for a request refused at submission.
pub fn build_rejection_event(label: &str, demand: i64, available_after: u64) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        unit_id: None,
        label: label.to_string(),
        action: AuditAction::Reject,
        demand,
        available_after,
        created_at_ms: now_ms(),
    }
}
