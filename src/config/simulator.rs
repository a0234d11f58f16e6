//! Simulator configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the total capacity.
pub const ENV_TOTAL_CAPACITY: &str = "MEMSIM_TOTAL_CAPACITY";
/// Environment variable holding the length of one time unit in milliseconds.
pub const ENV_TIME_UNIT_MS: &str = "MEMSIM_TIME_UNIT_MS";
/// Environment variable holding the audit buffer size.
pub const ENV_AUDIT_CAPACITY: &str = "MEMSIM_AUDIT_CAPACITY";

/// Startup configuration. Injected once; the engine never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Total simulated memory, in capacity units (MB in the classic setup).
    pub total_capacity: u64,
    /// Wall-clock milliseconds per duration unit.
    pub time_unit_ms: u64,
    /// Audit events retained in memory; 0 disables the audit log.
    pub audit_capacity: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            total_capacity: 1024,
            time_unit_ms: 1000,
            audit_capacity: 256,
        }
    }
}

impl SimulatorConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.total_capacity == 0 {
            return Err("total_capacity must be greater than 0".into());
        }
        if self.time_unit_ms == 0 {
            return Err("time_unit_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup and validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_TOTAL_CAPACITY) {
            cfg.total_capacity = parse_var(ENV_TOTAL_CAPACITY, &v)?;
        }
        if let Some(v) = lookup(ENV_TIME_UNIT_MS) {
            cfg.time_unit_ms = parse_var(ENV_TIME_UNIT_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_AUDIT_CAPACITY) {
            cfg.audit_capacity = parse_var(ENV_AUDIT_CAPACITY, &v)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("{key}={value:?} invalid: {e}"))
}
