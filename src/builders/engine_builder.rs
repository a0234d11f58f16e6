//! Builds an admission engine from simulator configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::SimulatorConfig;
use crate::core::{AdmissionEngine, InMemoryAuditSink, SimError, Spawn, StateObserver};

/// Engine plus the audit log it writes to, if one was configured.
pub struct BuiltEngine<S> {
    /// The engine.
    pub engine: AdmissionEngine<S>,
    /// Shared handle to the in-memory audit log.
    pub audit_log: Option<Arc<Mutex<InMemoryAuditSink>>>,
}

/// Build an engine from configuration using the provided spawner and observer.
pub fn build_engine<S>(
    cfg: &SimulatorConfig,
    spawner: S,
    observer: Arc<dyn StateObserver>,
) -> Result<BuiltEngine<S>, SimError>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    cfg.validate()
        .map_err(|e| SimError::Config(format!("config invalid: {e}")))?;

    let mut engine = AdmissionEngine::new(cfg.total_capacity, spawner, cfg.time_unit_ms)?
        .with_observer(observer);

    let audit_log = (cfg.audit_capacity > 0)
        .then(|| Arc::new(Mutex::new(InMemoryAuditSink::new(cfg.audit_capacity))));
    if let Some(log) = &audit_log {
        engine = engine.with_audit(log.clone());
    }

    tracing::info!(
        total_capacity = cfg.total_capacity,
        time_unit_ms = cfg.time_unit_ms,
        audit_capacity = cfg.audit_capacity,
        "admission engine built"
    );
    Ok(BuiltEngine { engine, audit_log })
}
