//! `CodeBlue` - Paramedic micro-simulation session engine
//!
//! This library provides the session state machine, vitals simulator,
//! and scoring rubric for a timed emergency-response drill.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod script;
pub mod session;
