//! Scenario configuration module.
//!
//! Loads and validates YAML scenario files: action definitions, phase
//! timing thresholds, and vitals simulator settings.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{LoadResult, load_scenario, parse_scenario};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
