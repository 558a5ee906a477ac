//! Session phases.

use serde::{Deserialize, Serialize};

/// The three ordered stages of a simulation session.
///
/// The derived `Ord` gives `Briefing < Emergency < Assessment`; the engine
/// only ever moves forward through this ordering, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Scenario introduction; no actions are scored yet.
    Briefing,
    /// The active portion: actions are recorded and vitals fluctuate.
    Emergency,
    /// Terminal for scoring purposes: the action log is frozen and the
    /// score is final.
    Assessment,
}

impl Phase {
    /// Returns the phase following this one, or `None` for the terminal phase.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Briefing => Some(Self::Emergency),
            Self::Emergency => Some(Self::Assessment),
            Self::Assessment => None,
        }
    }

    /// Returns whether this phase is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Assessment)
    }

    /// Display name for logs and UI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Briefing => "briefing",
            Self::Emergency => "emergency",
            Self::Assessment => "assessment",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Phase::Briefing < Phase::Emergency);
        assert!(Phase::Emergency < Phase::Assessment);
    }

    #[test]
    fn test_next_chain() {
        assert_eq!(Phase::Briefing.next(), Some(Phase::Emergency));
        assert_eq!(Phase::Emergency.next(), Some(Phase::Assessment));
        assert_eq!(Phase::Assessment.next(), None);
    }

    #[test]
    fn test_terminal() {
        assert!(!Phase::Briefing.is_terminal());
        assert!(!Phase::Emergency.is_terminal());
        assert!(Phase::Assessment.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::Emergency.to_string(), "emergency");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Phase::Assessment).unwrap();
        assert_eq!(json, "\"assessment\"");
        let phase: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, Phase::Assessment);
    }
}
