//! Tests for configuration validation

use memsim::config::SimulatorConfig;

#[test]
fn test_config_validation() {
    let valid = SimulatorConfig {
        total_capacity: 1024,
        time_unit_ms: 1000,
        audit_capacity: 64,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_config_invalid_total() {
    let invalid = SimulatorConfig {
        total_capacity: 0,
        ..SimulatorConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_time_unit() {
    let invalid = SimulatorConfig {
        time_unit_ms: 0,
        ..SimulatorConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "total_capacity": 4096,
        "time_unit_ms": 250,
        "audit_capacity": 0
    }"#;

    let config = SimulatorConfig::from_json_str(json).unwrap();
    assert_eq!(config.total_capacity, 4096);
    assert_eq!(config.time_unit_ms, 250);
    assert_eq!(config.audit_capacity, 0);
}

#[test]
fn test_config_from_json_uses_defaults() {
    let config = SimulatorConfig::from_json_str(r#"{ "total_capacity": 2048 }"#).unwrap();
    assert_eq!(config.total_capacity, 2048);
    assert_eq!(config.time_unit_ms, 1000);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SimulatorConfig::from_json_str(r#"{ "total_capacity": 0 }"#).is_err());
    assert!(SimulatorConfig::from_json_str("not json").is_err());
}
