//! Tests for the presentation-facing API models

use memsim::core::{AdmissionEngine, UnitStatus};
use memsim::runtime::{snapshot, submit, SubmitRequest, SubmitResponse, TokioSpawner};

fn request(label: &str, demand: i64, duration: i64) -> SubmitRequest {
    SubmitRequest {
        label: label.to_string(),
        demand,
        duration,
    }
}

#[tokio::test]
async fn test_submit_accepted_and_rejected() {
    let engine = AdmissionEngine::new(
        1024,
        TokioSpawner::new(tokio::runtime::Handle::current()),
        1000,
    )
    .unwrap();

    match submit(&engine, &request("Browser", 500, 5)) {
        SubmitResponse::Accepted { unit, status } => {
            assert_eq!(unit.label(), "Browser");
            assert_eq!(status, UnitStatus::Running);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    let rejected = submit(&engine, &request("", 0, 5));
    assert_eq!(
        rejected,
        SubmitResponse::Rejected {
            reason: "invalid parameters: demand=0, duration=5".to_string()
        }
    );

    let snap = snapshot(&engine);
    assert_eq!(snap.available, 524);
    assert_eq!(snap.running.len(), 1);
}

#[test]
fn test_request_and_response_json() {
    let req: SubmitRequest = serde_json::from_str(r#"{"demand": 128, "duration": 3}"#).unwrap();
    assert_eq!(req.label, "");
    assert_eq!(req.demand, 128);

    let rejected = SubmitResponse::Rejected {
        reason: "invalid parameters: demand=0, duration=1".to_string(),
    };
    let json = serde_json::to_value(&rejected).unwrap();
    assert_eq!(json["outcome"], "rejected");
}
