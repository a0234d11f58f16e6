//! # memsim
//!
//! A memory admission simulator: a fixed pool of capacity is shared among
//! competing units of work ("processes"), each requesting a fixed amount for
//! a fixed duration.
//!
//! ## Core Problem Solved
//!
//! - **All-or-nothing admission**: a unit either reserves its whole demand or
//!   waits; there is no partial allocation.
//! - **Timed release**: every admitted unit gets its own completion timer and
//!   returns its capacity exactly once when the duration elapses.
//! - **Order-preserving sweeps**: after each release the waiting queue is
//!   scanned head to tail and every unit that now fits is promoted. A large
//!   unit at the head does not block smaller ones behind it, and units that
//!   keep waiting never change their relative order.
//!
//! ## Architecture
//!
//! ```text
//! submit_request ──► AdmissionEngine ──► CapacityLedger::try_reserve
//!                        │  ok                       │ no
//!                        ▼                           ▼
//!                   RunningSet + timer          WaitingQueue (tail)
//!                        │ duration elapses
//!                        ▼
//!                   release ──► reevaluate_queue ──► promote fitting units
//! ```
//!
//! Ledger, running set, and waiting queue share one lock. Observers, audit
//! sinks, and timers are only touched after the lock is released.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memsim::core::AdmissionEngine;
//! use memsim::infra::WatchObserver;
//! use memsim::runtime::TokioSpawner;
//!
//! let (observer, mut changes) = WatchObserver::new();
//! let engine = AdmissionEngine::new(1024, TokioSpawner::multi_thread()?, 1000)?
//!     .with_observer(Arc::new(observer));
//!
//! engine.submit_request("Browser", 500, 5)?; // running, 524 left
//! engine.submit_request("IDE", 600, 5)?;     // waiting
//!
//! changes.changed().await?;
//! println!("{:?}", engine.snapshot());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core admission engine, capacity accounting, and completion scheduling.
pub mod core;
/// Configuration for capacity, timing, and the audit log.
pub mod config;
/// Builders to construct an engine from configuration.
pub mod builders;
/// Observer adapters for presentation layers.
pub mod infra;
/// Runtime adapters and the presentation-facing API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
