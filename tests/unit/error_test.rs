//! Tests for error types

use memsim::core::SimError;

#[test]
fn test_invalid_request_error() {
    let err = SimError::InvalidRequest {
        demand: 0,
        duration: 5,
    };
    assert_eq!(
        format!("{err}"),
        "invalid parameters: demand=0, duration=5"
    );
    assert_eq!(err.as_label(), "invalid_request");
}

#[test]
fn test_consistency_violation_error() {
    let err = SimError::ConsistencyViolation("unit 3 is not running".to_string());
    assert_eq!(
        format!("{err}"),
        "internal consistency violation: unit 3 is not running"
    );
    assert_eq!(err.as_label(), "consistency_violation");
}

#[test]
fn test_config_error() {
    let err = SimError::Config("total_capacity must be greater than 0".to_string());
    assert_eq!(
        format!("{err}"),
        "config error: total_capacity must be greater than 0"
    );
}

#[test]
fn test_converts_into_anyhow() {
    fn fallible() -> memsim::core::AppResult<()> {
        Err::<(), _>(SimError::Spawn("no threads".to_string()))?;
        Ok(())
    }
    let err = fallible().unwrap_err();
    assert_eq!(err.to_string(), "spawn error: no threads");
}
