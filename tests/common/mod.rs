//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Arc;

use codeblue::config::schema::{
    ActionDefinition, ScenarioConfig, ScenarioMetadata, TimingConfig, VitalsConfig,
};
use codeblue::session::SessionEngine;

/// The six-action paramedic drill used across the integration suite.
/// Three of the actions are critical.
#[must_use]
pub fn paramedic_scenario() -> Arc<ScenarioConfig> {
    let actions = [
        ("vitals", "Check vitals", true),
        ("airway", "Secure airway", true),
        ("oxygen", "Administer oxygen", false),
        ("iv", "Start IV line", false),
        ("monitor", "Attach cardiac monitor", true),
        ("transport", "Prepare for transport", false),
    ];

    Arc::new(ScenarioConfig {
        scenario: ScenarioMetadata {
            name: "paramedic".to_string(),
            description: None,
        },
        timing: TimingConfig::default(),
        vitals: VitalsConfig::default(),
        actions: actions
            .iter()
            .map(|(id, label, critical)| ActionDefinition {
                id: (*id).to_string(),
                label: (*label).to_string(),
                critical: *critical,
            })
            .collect(),
    })
}

/// A deterministic engine over the paramedic drill.
#[must_use]
pub fn seeded_engine() -> SessionEngine {
    SessionEngine::with_seed(paramedic_scenario(), 42).expect("valid scenario")
}

/// A started deterministic engine with the default 180s duration.
#[must_use]
pub fn started_engine() -> SessionEngine {
    let mut engine = seeded_engine();
    engine.start(180.0).expect("valid duration");
    engine
}
