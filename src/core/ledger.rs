//! Capacity accounting.
//!
//! The ledger is a plain value; atomicity comes from the engine's state lock,
//! which is the only owner of a live ledger.

use crate::core::SimError;

/// Total and currently available capacity.
///
/// `available` stays within `[0, total]` for the lifetime of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLedger {
    total: u64,
    available: u64,
}

impl CapacityLedger {
    /// Create a ledger with everything available.
    pub fn new(total: u64) -> Result<Self, SimError> {
        if total == 0 {
            return Err(SimError::Config("total capacity must be greater than 0".into()));
        }
        Ok(Self {
            total,
            available: total,
        })
    }

    /// Reserve `amount` if it fits. All-or-nothing.
    pub fn try_reserve(&mut self, amount: u64) -> bool {
        if amount > self.available {
            return false;
        }
        self.available -= amount;
        true
    }

    /// Return previously reserved capacity.
    ///
    /// Fails without touching state if the release would push `available`
    /// above `total`, which means it had no matching reservation.
    pub fn release(&mut self, amount: u64) -> Result<(), SimError> {
        match self.available.checked_add(amount) {
            Some(next) if next <= self.total => {
                self.available = next;
                Ok(())
            }
            _ => Err(SimError::ConsistencyViolation(format!(
                "release of {amount} exceeds reserved capacity (available={}, total={})",
                self.available, self.total
            ))),
        }
    }

    /// Capacity not reserved by anyone.
    pub const fn available(&self) -> u64 {
        self.available
    }

    /// Fixed total capacity.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Capacity currently reserved.
    pub const fn in_use(&self) -> u64 {
        self.total - self.available
    }
}
