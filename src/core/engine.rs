//! Admission engine: admit-or-queue, timed release, and queue sweeps.
//!
//! All mutable state (ledger, running set, waiting queue) lives in a single
//! [`EngineState`] behind one `parking_lot::Mutex`. Every transition step is
//! its own short critical section; timers, audit records, and observer
//! notifications always happen after the lock is released.

use std::num::NonZeroU64;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{
    build_audit_event, build_rejection_event, AuditAction, AuditSink, CapacityLedger,
    CompletionScheduler, NoopObserver, RunningSet, SimError, Spawn, StateObserver, Unit, UnitId,
    UnitRegistry, UnitStatus, WaitingQueue,
};

/// Outcome of an accepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The unit created for the request.
    pub unit: Unit,
    /// `Running` if admitted immediately, `Waiting` if queued.
    pub status: UnitStatus,
}

/// Consistent view of the engine taken under one lock acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Fixed total capacity.
    pub total: u64,
    /// Capacity not reserved.
    pub available: u64,
    /// Capacity reserved by running units.
    pub in_use: u64,
    /// Running units in admission order.
    pub running: Vec<Unit>,
    /// Waiting units in arrival order.
    pub waiting: Vec<Unit>,
}

/// Where a freshly submitted unit landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Admitted,
    Queued,
}

impl From<Placement> for UnitStatus {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Admitted => Self::Running,
            Placement::Queued => Self::Waiting,
        }
    }
}

/// Everything guarded by the engine lock.
#[derive(Debug)]
pub struct EngineState {
    ledger: CapacityLedger,
    running: RunningSet,
    waiting: WaitingQueue,
}

impl EngineState {
    fn new(total: u64) -> Result<Self, SimError> {
        Ok(Self {
            ledger: CapacityLedger::new(total)?,
            running: RunningSet::new(),
            waiting: WaitingQueue::new(),
        })
    }

    /// Reserve for `unit` or park it at the tail of the queue.
    fn admit(&mut self, unit: Unit) -> Placement {
        if self.ledger.try_reserve(unit.demand()) {
            self.running.insert(unit);
            Placement::Admitted
        } else {
            self.waiting.push_back(unit);
            Placement::Queued
        }
    }

    /// Release a running unit's capacity and drop it from the running set.
    ///
    /// Either both happen or neither does.
    fn finish(&mut self, id: UnitId) -> Result<Unit, SimError> {
        let demand = self
            .running
            .get(id)
            .map(Unit::demand)
            .ok_or_else(|| SimError::ConsistencyViolation(format!("unit {id} is not running")))?;
        self.ledger.release(demand)?;
        self.running
            .remove(id)
            .ok_or_else(|| SimError::ConsistencyViolation(format!("unit {id} vanished")))
    }

    /// Move a waiting unit to running if its demand fits right now.
    fn promote(&mut self, id: UnitId) -> Option<Unit> {
        let ledger = &mut self.ledger;
        let unit = self
            .waiting
            .remove_if(id, |u| ledger.try_reserve(u.demand()))?;
        self.running.insert(unit.clone());
        Some(unit)
    }

    fn check_invariants(&self) -> Result<(), SimError> {
        let total = self.ledger.total();
        let available = self.ledger.available();
        if available > total {
            return Err(SimError::ConsistencyViolation(format!(
                "available {available} exceeds total {total}"
            )));
        }
        let reserved = self.running.reserved();
        if reserved + available != total {
            return Err(SimError::ConsistencyViolation(format!(
                "running demand {reserved} + available {available} != total {total}"
            )));
        }
        if let Some(u) = self.waiting.iter().find(|u| self.running.contains(u.id())) {
            return Err(SimError::ConsistencyViolation(format!(
                "unit {} is both running and waiting",
                u.id()
            )));
        }
        Ok(())
    }

    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            total: self.ledger.total(),
            available: self.ledger.available(),
            in_use: self.ledger.in_use(),
            running: self.running.iter().cloned().collect(),
            waiting: self.waiting.iter().cloned().collect(),
        }
    }
}

/// Admits units against a fixed capacity, queues the rest, and releases
/// capacity when each admitted unit's duration elapses.
///
/// Cloning is cheap; clones share the same state.
pub struct AdmissionEngine<S> {
    state: Arc<Mutex<EngineState>>,
    registry: Arc<UnitRegistry>,
    scheduler: CompletionScheduler<S>,
    observer: Arc<dyn StateObserver>,
    audit: Option<Arc<Mutex<dyn AuditSink>>>,
}

impl<S: Clone> Clone for AdmissionEngine<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            registry: Arc::clone(&self.registry),
            scheduler: self.scheduler.clone(),
            observer: Arc::clone(&self.observer),
            audit: self.audit.clone(),
        }
    }
}

impl<S> AdmissionEngine<S>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    /// Create an engine with `total` capacity. One duration unit lasts
    /// `time_unit_ms` of wall-clock time.
    pub fn new(total: u64, spawner: S, time_unit_ms: u64) -> Result<Self, SimError> {
        Ok(Self {
            state: Arc::new(Mutex::new(EngineState::new(total)?)),
            registry: Arc::new(UnitRegistry::new()),
            scheduler: CompletionScheduler::new(spawner, time_unit_ms),
            observer: Arc::new(NoopObserver),
            audit: None,
        })
    }

    /// Attach the presentation-layer observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<Mutex<dyn AuditSink>>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate a request, create its unit, and admit or queue it.
    ///
    /// Returns once the unit is either running or waiting. Non-positive
    /// `demand` or `duration` is rejected without touching any state and
    /// without consuming a unit id. The id is issued under the state lock,
    /// so no reader sees an issued id whose unit is not yet placed.
    pub fn submit_request(
        &self,
        label: &str,
        demand: i64,
        duration: i64,
    ) -> Result<Submission, SimError> {
        let (Some(demand_units), Some(duration_units)) = (positive(demand), positive(duration))
        else {
            tracing::warn!(label, demand, duration, "request rejected: invalid parameters");
            if let Some(audit) = &self.audit {
                let event = build_rejection_event(label, demand, self.get_available());
                audit.lock().record(event);
            }
            return Err(SimError::InvalidRequest { demand, duration });
        };

        let (unit, placement, offered, available) = {
            let mut state = self.state.lock();
            let unit = Unit::new(self.registry.next_id(), label, demand_units, duration_units);
            let offered = state.ledger.available();
            let placement = state.admit(unit.clone());
            (unit, placement, offered, state.ledger.available())
        };
        tracing::debug!(unit_id = unit.id(), label = unit.label(), "unit created");
        self.record(&unit, AuditAction::Submit, offered);

        self.announce(&unit, placement, available);
        Ok(Submission {
            unit,
            status: placement.into(),
        })
    }

    /// Report a just-placed unit and arm its timer if it was admitted.
    fn announce(&self, unit: &Unit, placement: Placement, available: u64) {
        match placement {
            Placement::Admitted => {
                tracing::info!(
                    unit_id = unit.id(),
                    demand = unit.demand(),
                    available,
                    "unit admitted"
                );
                self.arm_completion(unit);
                self.record(unit, AuditAction::Start, available);
            }
            Placement::Queued => {
                tracing::info!(
                    unit_id = unit.id(),
                    demand = unit.demand(),
                    available,
                    "unit queued: insufficient capacity"
                );
                self.record(unit, AuditAction::Enqueue, available);
            }
        }
        self.notify();
    }

    /// Release a running unit's capacity, then sweep the waiting queue.
    ///
    /// Only the unit's own completion timer calls this; running units are
    /// never ended early. Completing a unit that is not running is a
    /// consistency violation and changes nothing, so a unit's capacity can
    /// only be returned once.
    fn complete(&self, id: UnitId) -> Result<(), SimError> {
        let (unit, available) = {
            let mut state = self.state.lock();
            let unit = state.finish(id)?;
            (unit, state.ledger.available())
        };
        tracing::info!(
            unit_id = id,
            released = unit.demand(),
            available,
            "unit completed"
        );
        self.record(&unit, AuditAction::Complete, available);

        self.reevaluate_queue();
        self.notify();
        Ok(())
    }

    /// Sweep the waiting queue head to tail and promote every unit that
    /// fits at the moment it is considered.
    ///
    /// The sweep walks a snapshot of the queue taken when it starts. A unit
    /// that does not fit stays where it is and does not block the units
    /// behind it. Returns the number of units promoted.
    pub fn reevaluate_queue(&self) -> usize {
        let snapshot = self.state.lock().waiting.snapshot_ids();
        if snapshot.is_empty() {
            return 0;
        }

        let mut promoted = 0;
        for id in snapshot {
            let step = {
                let mut state = self.state.lock();
                state
                    .promote(id)
                    .map(|unit| (unit, state.ledger.available()))
            };
            let Some((unit, available)) = step else {
                continue;
            };
            promoted += 1;
            tracing::info!(
                unit_id = unit.id(),
                demand = unit.demand(),
                available,
                "unit promoted from waiting queue"
            );
            self.arm_completion(&unit);
            self.record(&unit, AuditAction::Promote, available);
            self.notify();
        }

        tracing::debug!(promoted, "queue sweep finished");
        promoted
    }

    fn arm_completion(&self, unit: &Unit) {
        let engine = self.clone();
        let id = unit.id();
        self.scheduler.schedule(id, unit.duration(), move || {
            if let Err(e) = engine.complete(id) {
                tracing::error!(unit_id = id, error = %e, label = e.as_label(), "completion failed");
            }
        });
    }

    fn record(&self, unit: &Unit, action: AuditAction, available: u64) {
        if let Some(audit) = &self.audit {
            audit.lock().record(build_audit_event(unit, action, available));
        }
    }

    fn notify(&self) {
        self.observer.on_state_changed();
    }
}

impl<S> AdmissionEngine<S> {
    /// Capacity not currently reserved.
    pub fn get_available(&self) -> u64 {
        self.state.lock().ledger.available()
    }

    /// Fixed total capacity.
    pub fn total(&self) -> u64 {
        self.state.lock().ledger.total()
    }

    /// Running units in admission order.
    pub fn list_running(&self) -> Vec<Unit> {
        self.state.lock().running.iter().cloned().collect()
    }

    /// Waiting units in arrival order.
    pub fn list_waiting(&self) -> Vec<Unit> {
        self.state.lock().waiting.iter().cloned().collect()
    }

    /// Capacity, running set, and waiting queue read together.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.state.lock().snapshot()
    }

    /// Lifecycle position of a unit; `None` if the id was never issued.
    pub fn status_of(&self, id: UnitId) -> Option<UnitStatus> {
        // Ids are issued under this lock, so every id in range is placed.
        let state = self.state.lock();
        if id == 0 || id > self.registry.issued() {
            return None;
        }
        Some(if state.running.contains(id) {
            UnitStatus::Running
        } else if state.waiting.get(id).is_some() {
            UnitStatus::Waiting
        } else {
            UnitStatus::Terminated
        })
    }

    /// Number of units created so far.
    pub fn units_created(&self) -> u64 {
        self.registry.issued()
    }

    /// Verify `0 <= available <= total` and
    /// `available + sum(running demand) == total`.
    pub fn check_invariants(&self) -> Result<(), SimError> {
        self.state.lock().check_invariants()
    }
}

fn positive(value: i64) -> Option<NonZeroU64> {
    u64::try_from(value).ok().and_then(NonZeroU64::new)
}
