//! Work units and the registry that numbers them.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unit identifier. Assigned once, starting at 1.
pub type UnitId = u64;

/// Where a unit currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    /// Holding reserved capacity with a completion timer armed.
    Running,
    /// Parked in the waiting queue until capacity frees up.
    Waiting,
    /// Capacity released; the unit is gone.
    Terminated,
}

/// A simulated process requesting `demand` capacity for `duration` time units.
///
/// Both quantities are non-zero by type, including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    id: UnitId,
    label: String,
    demand: NonZeroU64,
    duration: NonZeroU64,
}

impl Unit {
    /// Build a unit. A blank label is replaced by `Unit<id>`.
    pub fn new(id: UnitId, label: &str, demand: NonZeroU64, duration: NonZeroU64) -> Self {
        let label = label.trim();
        let label = if label.is_empty() {
            format!("Unit{id}")
        } else {
            label.to_string()
        };
        Self {
            id,
            label,
            demand,
            duration,
        }
    }

    /// Identifier.
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Descriptive label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Capacity requested.
    pub const fn demand(&self) -> u64 {
        self.demand.get()
    }

    /// Time units the unit holds capacity once admitted.
    pub const fn duration(&self) -> u64 {
        self.duration.get()
    }
}

/// Hands out monotonically increasing unit ids.
#[derive(Debug)]
pub struct UnitRegistry {
    next: AtomicU64,
}

impl UnitRegistry {
    /// Create a registry whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Reserve the next id.
    pub fn next_id(&self) -> UnitId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
