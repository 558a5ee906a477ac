//! Simulation session engine.
//!
//! A single-threaded state machine sequencing the three session phases,
//! driven by an external time signal and discrete action submissions,
//! plus a pure scoring function over the resulting action log.
//!
//! # Architecture
//!
//! - [`SessionState`] — the sole mutable entity (phase, clock, action log, vitals)
//! - [`SessionEngine`] — orchestrator (trigger evaluation, transitions, scoring)
//! - [`VitalsSimulator`] — cadence-tracked synthetic vitals refresh
//! - [`scoring`] — the pure rubric

pub mod engine;
pub mod phase;
pub mod scoring;
pub mod state;
pub mod vitals;

pub use engine::SessionEngine;
pub use phase::Phase;
pub use scoring::{ActionLogEntry, Assessment, assess};
pub use state::{ActionId, PhaseTransition, SessionState, Snapshot};
pub use vitals::{Vitals, VitalsSimulator};
