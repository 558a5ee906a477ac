//! Error types for `CodeBlue`.
//!
//! Two recovery classes exist: [`SessionError`] is always recovered locally
//! by rejecting the offending call and leaving session state untouched, while
//! [`ConfigError`] is fatal at load or construction time and never surfaces
//! mid-session.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `CodeBlue` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Session engine error (rejected input, contract violation)
    pub const SESSION_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `CodeBlue` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum CodeBlueError {
    /// Scenario loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session engine error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CodeBlueError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Session(_) => ExitCode::SESSION_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Scenario configuration loading and validation errors.
///
/// These cover all failure modes during scenario parsing and validation.
/// A scenario that loads successfully can never produce one of these
/// mid-session.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the scenario file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Scenario validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path to the scenario file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced scenario file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Scenario defines no actions
    #[error("scenario '{scenario}' defines no actions")]
    EmptyActions {
        /// Scenario name
        scenario: String,
    },

    /// Scenario defines no critical actions (scoring denominator would be zero)
    #[error("scenario '{scenario}' has no critical actions; the scoring rubric requires at least one")]
    NoCriticalActions {
        /// Scenario name
        scenario: String,
    },

    /// Two actions share the same id
    #[error("duplicate action id '{id}'")]
    DuplicateAction {
        /// The duplicated action id
        id: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during scenario validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "actions[2].id")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - prevents the scenario from being used
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Session Errors
// ============================================================================

/// Session engine input rejections.
///
/// Every variant is a caller contract violation: the call is rejected and
/// session state is left unchanged, with no partial mutation. Hosts are
/// expected to treat these as no-ops with optional diagnostic logging,
/// never as user-facing failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation was invoked before `start`
    #[error("session not started")]
    NotStarted,

    /// The supplied time signal moved backwards
    #[error("time regression: supplied {supplied}s, already at {current}s")]
    TimeRegression {
        /// Elapsed seconds the session is currently at
        current: f64,
        /// The regressing value that was supplied
        supplied: f64,
    },

    /// The supplied duration or time value is not a finite non-negative number
    #[error("invalid time value: {value}")]
    InvalidTime {
        /// The rejected value
        value: f64,
    },

    /// The action id does not reference a configured action
    #[error("unknown action: '{id}'")]
    UnknownAction {
        /// The unrecognized action id
        id: String,
    },

    /// Mutation attempted after the assessment phase was reached
    #[error("session already in assessment; state is frozen")]
    SessionComplete,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `CodeBlue` operations.
pub type Result<T> = std::result::Result<T, CodeBlueError>;

// ============================================================================
// Tests
// ============================================================================
