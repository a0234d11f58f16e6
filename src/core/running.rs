//! Units currently holding capacity.

use crate::core::{Unit, UnitId};

/// Admission-ordered set of running units.
#[derive(Debug, Default, Clone)]
pub struct RunningSet {
    units: Vec<Unit>,
}

impl RunningSet {
    /// Empty set.
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Record an admitted unit.
    pub fn insert(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Remove a unit by id, returning it if it was running.
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let pos = self.units.iter().position(|u| u.id() == id)?;
        Some(self.units.remove(pos))
    }

    /// Look up a running unit.
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// Whether the unit is running.
    pub fn contains(&self, id: UnitId) -> bool {
        self.units.iter().any(|u| u.id() == id)
    }

    /// Sum of demand over all running units.
    pub fn reserved(&self) -> u64 {
        self.units.iter().map(Unit::demand).sum()
    }

    /// Iterate in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Number of running units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when nothing is running.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
