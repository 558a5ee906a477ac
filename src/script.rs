//! Session scripts.
//!
//! A script is the replayable stand-in for the engine's two external
//! collaborators: the media/time source (scenario duration) and the UI
//! layer (timestamped action submissions). The CLI runner feeds a script
//! through an engine either instantly or on a real-time ticker.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A scripted session: total duration plus timestamped action entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionScript {
    /// Total scenario duration in seconds
    pub duration_seconds: f64,

    /// Action submissions, applied when the clock reaches `at_seconds`
    #[serde(default)]
    pub actions: Vec<ScriptedAction>,
}

/// One timestamped action submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScriptedAction {
    /// Simulated second at which the action is submitted
    pub at_seconds: f64,

    /// Action id to record
    pub action: String,
}

impl SessionScript {
    /// Loads a script from a YAML file. Entries are sorted by timestamp
    /// so out-of-order files replay correctly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] or [`ConfigError::ParseError`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut script: Self =
            serde_yaml::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        script
            .actions
            .sort_by(|a, b| a.at_seconds.total_cmp(&b.at_seconds));
        Ok(script)
    }
}
