//! Tests for builder modules

use std::sync::Arc;

use memsim::builders::build_engine;
use memsim::config::SimulatorConfig;
use memsim::core::{AuditAction, SimError, UnitStatus};
use memsim::infra::CountingObserver;
use memsim::runtime::TokioSpawner;

#[tokio::test]
async fn test_build_engine_from_config() {
    let cfg = SimulatorConfig {
        total_capacity: 256,
        time_unit_ms: 1000,
        audit_capacity: 8,
    };
    let observer = Arc::new(CountingObserver::new());
    let built = build_engine(
        &cfg,
        TokioSpawner::new(tokio::runtime::Handle::current()),
        observer.clone(),
    )
    .unwrap();

    assert_eq!(built.engine.total(), 256);
    let submission = built.engine.submit_request("", 300, 1).unwrap();
    assert_eq!(submission.status, UnitStatus::Waiting);
    assert_eq!(observer.count(), 1);

    let log = built.audit_log.expect("audit enabled");
    let last = log.lock().events().pop().unwrap();
    assert_eq!(last.action, AuditAction::Enqueue);
}

#[tokio::test]
async fn test_build_engine_without_audit() {
    let cfg = SimulatorConfig {
        audit_capacity: 0,
        ..SimulatorConfig::default()
    };
    let built = build_engine(
        &cfg,
        TokioSpawner::new(tokio::runtime::Handle::current()),
        Arc::new(CountingObserver::new()),
    )
    .unwrap();
    assert!(built.audit_log.is_none());
    assert_eq!(built.engine.get_available(), 1024);
}

#[tokio::test]
async fn test_build_engine_rejects_invalid_config() {
    let cfg = SimulatorConfig {
        total_capacity: 0,
        ..SimulatorConfig::default()
    };
    let result = build_engine(
        &cfg,
        TokioSpawner::new(tokio::runtime::Handle::current()),
        Arc::new(CountingObserver::new()),
    );
    assert!(matches!(result, Err(SimError::Config(_))));
}
