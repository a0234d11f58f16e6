//! Arrival-ordered queue of units that could not be admitted.
//!
//! Units leave only through promotion. Removal never reorders the rest, so
//! whatever is still waiting keeps its relative arrival order.

use std::collections::VecDeque;

use crate::core::{Unit, UnitId};

/// FIFO of waiting units.
#[derive(Debug, Default, Clone)]
pub struct WaitingQueue {
    units: VecDeque<Unit>,
}

impl WaitingQueue {
    /// Empty queue.
    pub const fn new() -> Self {
        Self {
            units: VecDeque::new(),
        }
    }

    /// Append at the tail.
    pub fn push_back(&mut self, unit: Unit) {
        self.units.push_back(unit);
    }

    /// Ids in queue order at this instant. Sweeps iterate over this copy so
    /// that later mutations do not change what the sweep examines.
    pub fn snapshot_ids(&self) -> Vec<UnitId> {
        self.units.iter().map(Unit::id).collect()
    }

    /// Look up a waiting unit.
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// Remove a unit by id only if `take` accepts it, preserving the order
    /// of the others.
    ///
    /// `take` runs at most once, on the matching unit, and may have side
    /// effects such as reserving capacity for it.
    pub fn remove_if<F>(&mut self, id: UnitId, take: F) -> Option<Unit>
    where
        F: FnOnce(&Unit) -> bool,
    {
        let pos = self.units.iter().position(|u| u.id() == id)?;
        if take(&self.units[pos]) {
            self.units.remove(pos)
        } else {
            None
        }
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Number of waiting units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
