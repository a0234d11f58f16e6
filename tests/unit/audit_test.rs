//! Tests for the audit trail written by the engine

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use memsim::core::{AdmissionEngine, AuditAction, InMemoryAuditSink, Spawn};
use parking_lot::Mutex;

#[derive(Clone)]
struct TestSpawner;

impl Spawn for TestSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(fut);
    }
}

#[tokio::test(start_paused = true)]
async fn test_engine_records_lifecycle() {
    let log = Arc::new(Mutex::new(InMemoryAuditSink::new(32)));
    let engine = AdmissionEngine::new(100, TestSpawner, 1000)
        .unwrap()
        .with_audit(log.clone());

    engine.submit_request("first", 60, 1).unwrap();
    engine.submit_request("second", 50, 1).unwrap();
    assert!(engine.submit_request("bad", 0, 1).is_err());

    tokio::time::sleep(Duration::from_millis(1001)).await;

    let actions: Vec<AuditAction> = log.lock().events().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Submit,
            AuditAction::Start,
            AuditAction::Submit,
            AuditAction::Enqueue,
            AuditAction::Reject,
            AuditAction::Complete,
            AuditAction::Promote,
        ]
    );

    let events = log.lock().events();
    assert_eq!(events[1].available_after, 40);
    assert_eq!(events[4].unit_id, None);
    assert_eq!(events[4].label, "bad");
    assert_eq!(events[5].unit_id, Some(1));
    assert_eq!(events[5].available_after, 100);
    assert_eq!(events[6].unit_id, Some(2));
    assert_eq!(events[6].available_after, 50);
}
