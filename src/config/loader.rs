//! Scenario loader.
//!
//! Loading pipeline:
//! 1. Read the YAML scenario file
//! 2. Deserialize to [`ScenarioConfig`]
//! 3. Validate (collecting all issues)
//! 4. Freeze with `Arc`

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::schema::ScenarioConfig;
use crate::config::validation::Validator;
use crate::error::{ConfigError, ValidationIssue};

/// Result of loading a scenario file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated scenario, frozen for sharing.
    pub scenario: Arc<ScenarioConfig>,

    /// Warnings encountered during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Loads a scenario file and returns the frozen configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the path does not exist,
/// [`ConfigError::ParseError`] if the YAML is malformed, and
/// [`ConfigError::ValidationError`] carrying every collected issue if
/// semantic validation fails.
pub fn load_scenario(path: &Path) -> Result<LoadResult, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_scenario(&text, path)
}

/// Parses and validates scenario YAML text.
///
/// `path` is used only for error reporting.
///
/// # Errors
///
/// Same as [`load_scenario`], minus the missing-file case.
pub fn parse_scenario(text: &str, path: &Path) -> Result<LoadResult, ConfigError> {
    let config: ScenarioConfig =
        serde_yaml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let result = Validator::new().validate(&config);
    if result.has_errors() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            errors: result.errors,
        });
    }

    for warning in &result.warnings {
        warn!(scenario = %config.scenario.name, %warning, "scenario validation warning");
    }

    debug!(
        scenario = %config.scenario.name,
        actions = config.actions.len(),
        critical = config.critical_count(),
        "scenario loaded"
    );

    Ok(LoadResult {
        scenario: Arc::new(config),
        warnings: result.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_scenario() {
        let file = write_temp(
            r"
scenario:
  name: test
actions:
  - id: vitals
    label: Check Vitals
    critical: true
  - id: airway
    label: Secure Airway
    critical: true
  - id: oxygen
    label: Administer Oxygen
",
        );
        let result = load_scenario(file.path()).unwrap();
        assert_eq!(result.scenario.scenario.name, "test");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenario(&PathBuf::from("/nonexistent/scenario.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let file = write_temp("scenario: [unclosed");
        let err = load_scenario(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_validation_errors_collected() {
        let file = write_temp(
            r"
scenario:
  name: ''
actions:
  - id: a
    label: A
  - id: a
    label: A again
",
        );
        let err = load_scenario(file.path()).unwrap_err();
        match err {
            ConfigError::ValidationError { errors, .. } => {
                // empty name + duplicate id + no critical actions
                assert!(errors.len() >= 3, "got: {errors:?}");
            }
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn test_warnings_survive_load() {
        let file = write_temp(
            r"
scenario:
  name: test
timing:
  early_finish_actions: 5
actions:
  - id: vitals
    label: Check Vitals
    critical: true
",
        );
        let result = load_scenario(file.path()).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
}
