//! Scenario configuration types.
//!
//! A scenario file describes everything the session engine needs: the
//! action set with its scoring flags, the phase timing thresholds, and the
//! synthetic vitals baseline and ranges. These types are deserialized from
//! YAML scenario files; all timing and vitals sections carry the defaults
//! of the shipped paramedic scenario, so a minimal file only needs metadata
//! and actions.

use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration for a simulation scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScenarioConfig {
    /// Scenario metadata (required)
    pub scenario: ScenarioMetadata,

    /// Phase timing thresholds
    #[serde(default)]
    pub timing: TimingConfig,

    /// Vitals simulator configuration
    #[serde(default)]
    pub vitals: VitalsConfig,

    /// Action definitions (required, non-empty, at least one critical)
    pub actions: Vec<ActionDefinition>,
}

impl ScenarioConfig {
    /// Looks up an action definition by id.
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Returns the number of critical actions — the fixed scoring
    /// denominator, independent of what a session selects.
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.actions.iter().filter(|a| a.critical).count()
    }
}

/// Scenario identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScenarioMetadata {
    /// Scenario name (required)
    pub name: String,

    /// Short description shown by `codeblue actions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Actions
// ============================================================================

/// A discrete user-selectable task during the Emergency phase.
///
/// Immutable once loaded; the set of valid action ids a session may record
/// is exactly the set defined here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ActionDefinition {
    /// Unique stable identifier
    pub id: String,

    /// Display text (presentation concern, not engine logic)
    pub label: String,

    /// Whether this action counts toward the scoring denominator
    #[serde(default)]
    pub critical: bool,
}

// ============================================================================
// Timing
// ============================================================================

/// Phase transition thresholds, in scenario seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimingConfig {
    /// Elapsed seconds at which Briefing gives way to Emergency
    #[serde(default = "default_briefing_seconds")]
    pub briefing_seconds: f64,

    /// Seconds before the end of the scenario at which Assessment begins
    #[serde(default = "default_assessment_lead_seconds")]
    pub assessment_lead_seconds: f64,

    /// Distinct selected actions that end the Emergency phase early
    #[serde(default = "default_early_finish_actions")]
    pub early_finish_actions: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            briefing_seconds: default_briefing_seconds(),
            assessment_lead_seconds: default_assessment_lead_seconds(),
            early_finish_actions: default_early_finish_actions(),
        }
    }
}

const fn default_briefing_seconds() -> f64 {
    15.0
}

const fn default_assessment_lead_seconds() -> f64 {
    30.0
}

const fn default_early_finish_actions() -> usize {
    3
}

// ============================================================================
// Vitals
// ============================================================================

/// Vitals simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VitalsConfig {
    /// Simulated seconds between vitals refreshes during Emergency
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: f64,

    /// Initial vitals shown during Briefing
    #[serde(default)]
    pub baseline: VitalsBaseline,

    /// Inclusive heart-rate draw range during Emergency
    #[serde(default = "default_heart_rate_range")]
    pub heart_rate_range: VitalsRange,

    /// Inclusive oxygen-saturation draw range during Emergency
    #[serde(default = "default_oxygen_saturation_range")]
    pub oxygen_saturation_range: VitalsRange,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: default_refresh_seconds(),
            baseline: VitalsBaseline::default(),
            heart_rate_range: default_heart_rate_range(),
            oxygen_saturation_range: default_oxygen_saturation_range(),
        }
    }
}

const fn default_refresh_seconds() -> f64 {
    3.0
}

const fn default_heart_rate_range() -> VitalsRange {
    VitalsRange { min: 110, max: 129 }
}

const fn default_oxygen_saturation_range() -> VitalsRange {
    VitalsRange { min: 93, max: 97 }
}

/// An inclusive integer draw range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VitalsRange {
    /// Lower bound (inclusive)
    pub min: u16,
    /// Upper bound (inclusive)
    pub max: u16,
}

/// Initial patient vitals, shown until the first Emergency refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VitalsBaseline {
    /// Heart rate in beats per minute
    #[serde(default = "default_heart_rate")]
    pub heart_rate: u16,

    /// Blood pressure as a display string, e.g. "120/80"
    #[serde(default = "default_blood_pressure")]
    pub blood_pressure: String,

    /// Respiration rate in breaths per minute
    #[serde(default = "default_respiration")]
    pub respiration: u16,

    /// Body temperature in degrees Fahrenheit
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Oxygen saturation percentage
    #[serde(default = "default_oxygen_saturation")]
    pub oxygen_saturation: u16,
}

impl Default for VitalsBaseline {
    fn default() -> Self {
        Self {
            heart_rate: default_heart_rate(),
            blood_pressure: default_blood_pressure(),
            respiration: default_respiration(),
            temperature: default_temperature(),
            oxygen_saturation: default_oxygen_saturation(),
        }
    }
}

const fn default_heart_rate() -> u16 {
    95
}

fn default_blood_pressure() -> String {
    "120/80".to_string()
}

const fn default_respiration() -> u16 {
    18
}

const fn default_temperature() -> f64 {
    98.6
}

const fn default_oxygen_saturation() -> u16 {
    98
}

// ============================================================================
// Tests
// ============================================================================
