//! Session state representation.
//!
//! The sole mutable entity of a simulation session, owned exclusively by
//! the engine instance. The engine is single-threaded by design: all
//! mutation is serialized through `&mut` access, so the state is a plain
//! struct rather than anything atomic.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::vitals::Vitals;

/// Newtype wrapper for action identifiers.
///
/// Wraps action ids like `"vitals"` or `"airway"` for type-safe tracking
/// in the action log.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub String);

impl ActionId {
    /// Creates a new `ActionId` from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of a phase transition for downstream processing.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseTransition {
    /// Phase we transitioned from
    pub from: Phase,
    /// Phase we transitioned to
    pub to: Phase,
    /// Human-readable reason the trigger fired
    pub reason: String,
    /// Elapsed simulated seconds at the moment of transition
    pub at_seconds: f64,
}

/// Read-only view of the current session state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Current phase
    pub phase: Phase,
    /// Elapsed simulated seconds
    pub elapsed_seconds: f64,
    /// Total scenario duration in seconds
    pub total_duration: f64,
    /// Ordered distinct selected actions
    pub selected_actions: Vec<ActionId>,
    /// Latest vitals snapshot
    pub vitals: Vitals,
    /// Whether the session is unpaused and not yet complete
    pub running: bool,
    /// Set exactly once when Assessment is entered
    pub show_assessment: bool,
}

/// Mutable session state.
///
/// Invariants maintained by the engine:
/// - `phase` never regresses and advances one step at a time
/// - `elapsed_seconds` is non-decreasing
/// - `selected_actions` is append-only, duplicate-free, and frozen once
///   `phase == Assessment`
#[derive(Debug, Clone)]
pub struct SessionState {
    phase: Phase,
    elapsed_seconds: f64,
    total_duration: f64,
    selected_actions: Vec<ActionId>,
    vitals: Vitals,
    running: bool,
    show_assessment: bool,
}

impl SessionState {
    /// Creates a fresh state in Briefing at zero elapsed seconds.
    #[must_use]
    pub fn new(total_duration: f64, vitals: Vitals) -> Self {
        Self {
            phase: Phase::Briefing,
            elapsed_seconds: 0.0,
            total_duration,
            selected_actions: Vec::new(),
            vitals,
            running: true,
            show_assessment: false,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns elapsed simulated seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Returns the total scenario duration.
    #[must_use]
    pub const fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Returns the ordered distinct selected actions.
    #[must_use]
    pub fn selected_actions(&self) -> &[ActionId] {
        &self.selected_actions
    }

    /// Returns the latest vitals snapshot.
    #[must_use]
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Returns whether the session is unpaused and not yet complete.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whether the assessment overlay should be shown.
    #[must_use]
    pub const fn show_assessment(&self) -> bool {
        self.show_assessment
    }

    /// Returns whether `id` is already in the action log.
    #[must_use]
    pub fn has_action(&self, id: &str) -> bool {
        self.selected_actions.iter().any(|a| a.as_str() == id)
    }

    /// Builds a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            elapsed_seconds: self.elapsed_seconds,
            total_duration: self.total_duration,
            selected_actions: self.selected_actions.clone(),
            vitals: self.vitals.clone(),
            running: self.running,
            show_assessment: self.show_assessment,
        }
    }

    pub(crate) const fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed_seconds = elapsed;
    }

    pub(crate) fn push_action(&mut self, id: ActionId) {
        debug_assert!(!self.has_action(id.as_str()));
        self.selected_actions.push(id);
    }

    /// Advances the phase one step. Entering Assessment latches the
    /// `show_assessment` flag and stops the session.
    pub(crate) const fn enter(&mut self, phase: Phase) {
        debug_assert!(phase as u8 == self.phase as u8 + 1);
        self.phase = phase;
        if phase.is_terminal() {
            self.show_assessment = true;
            self.running = false;
        }
    }

    pub(crate) const fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(crate) const fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
