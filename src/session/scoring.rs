//! Scoring rubric.
//!
//! A pure function of the final action log and the configured action set:
//! `score = round(100 * completed_critical / critical_count)`. Non-critical
//! selections never move the score but stay in the log for display.

use serde::Serialize;

use crate::config::schema::ScenarioConfig;

use super::state::ActionId;

/// Final session outcome: score plus the ordered action log.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Percentage of critical actions completed, rounded, in `[0, 100]`
    pub score: u8,
    /// Every selected action in selection order
    pub action_log: Vec<ActionLogEntry>,
}

/// One entry of the action log.
#[derive(Debug, Clone, Serialize)]
pub struct ActionLogEntry {
    /// Action id
    pub id: String,
    /// Display label
    pub label: String,
    /// Whether the action counted toward the score
    pub critical: bool,
}

/// Computes the assessment for a selection against a scenario's rubric.
///
/// Total for any well-formed input: every id in `selected` is expected to
/// reference a configured action (the engine guarantees this), and scenario
/// validation guarantees at least one critical action, so the denominator
/// is never zero.
///
/// # Panics
///
/// Panics if the scenario defines no critical actions; load-time validation
/// rejects such scenarios before a session can exist.
#[must_use]
pub fn assess(scenario: &ScenarioConfig, selected: &[ActionId]) -> Assessment {
    let critical_count = scenario.critical_count();
    assert!(
        critical_count > 0,
        "scoring requires at least one critical action"
    );

    let completed_critical = selected
        .iter()
        .filter(|id| scenario.action(id.as_str()).is_some_and(|a| a.critical))
        .count();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = (100.0 * completed_critical as f64 / critical_count as f64).round() as u8;

    let action_log = selected
        .iter()
        .filter_map(|id| scenario.action(id.as_str()))
        .map(|a| ActionLogEntry {
            id: a.id.clone(),
            label: a.label.clone(),
            critical: a.critical,
        })
        .collect();

    Assessment { score, action_log }
}
