//! Configuration for capacity, timing, and the audit log.

pub mod simulator;

pub use simulator::{SimulatorConfig, ENV_AUDIT_CAPACITY, ENV_TIME_UNIT_MS, ENV_TOTAL_CAPACITY};
