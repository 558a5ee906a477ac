//! Scenario validation.
//!
//! Semantic validation performed on a fully deserialized [`ScenarioConfig`].
//! Validation collects ALL issues (doesn't stop at the first) to provide
//! comprehensive feedback, and separates hard errors from warnings.

use crate::config::schema::ScenarioConfig;
use crate::error::{Severity, ValidationIssue};

use std::collections::HashSet;

// ============================================================================
// Public API
// ============================================================================

/// Result of scenario validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scenario validator.
///
/// Performs semantic validation on a [`ScenarioConfig`]: the action set,
/// the scoring rubric invariant, timing thresholds, and vitals ranges.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a scenario and returns the result.
    pub fn validate(&mut self, config: &ScenarioConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_metadata(config);
        self.validate_actions(config);
        self.validate_timing(config);
        self.validate_vitals(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Checks
    // ========================================================================

    fn validate_metadata(&mut self, config: &ScenarioConfig) {
        if config.scenario.name.is_empty() {
            self.add_error("scenario.name", "scenario name cannot be empty");
        }

        if config.scenario.name.len() > 100 {
            self.add_warning(
                "scenario.name",
                "scenario name is unusually long (> 100 characters)",
            );
        }
    }

    fn validate_actions(&mut self, config: &ScenarioConfig) {
        if config.actions.is_empty() {
            self.add_error("actions", "scenario must define at least one action");
            return;
        }

        let mut seen = HashSet::new();
        for (i, action) in config.actions.iter().enumerate() {
            if action.id.is_empty() {
                self.add_error(&format!("actions[{i}].id"), "action id cannot be empty");
            }
            if action.label.is_empty() {
                self.add_warning(&format!("actions[{i}].label"), "action label is empty");
            }
            if !seen.insert(action.id.as_str()) {
                self.add_error(
                    &format!("actions[{i}].id"),
                    &format!("duplicate action id '{}'", action.id),
                );
            }
        }

        // The scoring rubric divides by the critical count.
        if config.critical_count() == 0 {
            self.add_error(
                "actions",
                "scenario must define at least one critical action",
            );
        }
    }

    fn validate_timing(&mut self, config: &ScenarioConfig) {
        let timing = &config.timing;

        if !timing.briefing_seconds.is_finite() || timing.briefing_seconds < 0.0 {
            self.add_error(
                "timing.briefing_seconds",
                "briefing duration must be a finite non-negative number",
            );
        }

        if !timing.assessment_lead_seconds.is_finite() || timing.assessment_lead_seconds < 0.0 {
            self.add_error(
                "timing.assessment_lead_seconds",
                "assessment lead must be a finite non-negative number",
            );
        }

        if timing.early_finish_actions == 0 {
            self.add_error(
                "timing.early_finish_actions",
                "early finish threshold must be at least 1",
            );
        }

        if timing.early_finish_actions > config.actions.len() && !config.actions.is_empty() {
            self.add_warning(
                "timing.early_finish_actions",
                "threshold exceeds the number of actions; early finish can never trigger",
            );
        }
    }

    fn validate_vitals(&mut self, config: &ScenarioConfig) {
        let vitals = &config.vitals;

        if !vitals.refresh_seconds.is_finite() || vitals.refresh_seconds <= 0.0 {
            self.add_error(
                "vitals.refresh_seconds",
                "vitals refresh cadence must be a finite positive number",
            );
        }

        if vitals.heart_rate_range.min > vitals.heart_rate_range.max {
            self.add_error("vitals.heart_rate_range", "range min exceeds max");
        }

        if vitals.oxygen_saturation_range.min > vitals.oxygen_saturation_range.max {
            self.add_error("vitals.oxygen_saturation_range", "range min exceeds max");
        }

        if vitals.oxygen_saturation_range.max > 100 {
            self.add_warning(
                "vitals.oxygen_saturation_range",
                "oxygen saturation above 100% is not physiological",
            );
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
