//! Core admission engine and capacity accounting.

pub mod audit;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod running;
pub mod scheduler;
pub mod unit;
pub mod waiting_queue;

pub use audit::{
    build_audit_event, build_rejection_event, AuditAction, AuditEvent, AuditSink,
    InMemoryAuditSink,
};
pub use engine::{AdmissionEngine, EngineSnapshot, EngineState, Submission};
pub use error::{AppResult, SimError};
pub use ledger::CapacityLedger;
pub use observer::{NoopObserver, StateObserver};
pub use running::RunningSet;
pub use scheduler::{CompletionScheduler, Spawn};
pub use unit::{Unit, UnitId, UnitRegistry, UnitStatus};
pub use waiting_queue::WaitingQueue;
