//! `validate` command handler.
//!
//! Checks scenario files without running a session, reporting every
//! collected issue rather than stopping at the first.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::load_scenario;
use crate::error::{CodeBlueError, ConfigError, Severity, ValidationIssue};

/// Per-file validation outcome for structured output.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Validates scenario files and reports all issues.
///
/// With `--strict`, warnings fail validation too.
///
/// # Errors
///
/// Returns a config error if any file fails validation.
pub fn validate(args: &ValidateArgs) -> Result<(), CodeBlueError> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let report = check_file(path, args.strict);
        failed |= !report.valid;
        reports.push(report);
    }

    match args.format {
        OutputFormat::Human => {
            for report in &reports {
                let status = if report.valid { "ok" } else { "FAILED" };
                println!("{}: {status}", report.file);
                for error in &report.errors {
                    println!("  error: {error}");
                }
                for warning in &report.warnings {
                    println!("  warning: {warning}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    if failed {
        return Err(ConfigError::ValidationError {
            path: args
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            errors: vec![],
        }
        .into());
    }
    Ok(())
}

fn check_file(path: &Path, strict: bool) -> FileReport {
    let file = path.display().to_string();

    match load_scenario(path) {
        Ok(result) => {
            let warnings: Vec<String> = result
                .warnings
                .iter()
                .map(issue_summary)
                .collect();
            let valid = !(strict && !warnings.is_empty());
            FileReport {
                file,
                valid,
                errors: vec![],
                warnings,
            }
        }
        Err(ConfigError::ValidationError { errors, .. }) => FileReport {
            file,
            valid: false,
            errors: errors
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .map(issue_summary)
                .collect(),
            warnings: errors
                .iter()
                .filter(|i| i.severity == Severity::Warning)
                .map(issue_summary)
                .collect(),
        },
        Err(e) => FileReport {
            file,
            valid: false,
            errors: vec![e.to_string()],
            warnings: vec![],
        },
    }
}

fn issue_summary(issue: &ValidationIssue) -> String {
    format!("{} at {}", issue.message, issue.path)
}
