//! `actions` command handler.
//!
//! Lists the actions a scenario offers, marking the critical ones.

use crate::cli::args::{ActionsArgs, OutputFormat};
use crate::config::loader::load_scenario;
use crate::error::CodeBlueError;

/// Lists a scenario's actions.
///
/// # Errors
///
/// Returns a config error if the scenario fails to load.
pub fn actions(args: &ActionsArgs) -> Result<(), CodeBlueError> {
    let load = load_scenario(&args.scenario)?;
    let scenario = &load.scenario;

    match args.format {
        OutputFormat::Human => {
            println!("Scenario: {}", scenario.scenario.name);
            if let Some(description) = &scenario.scenario.description {
                println!("{description}");
            }
            println!(
                "Actions ({} total, {} critical):",
                scenario.actions.len(),
                scenario.critical_count()
            );
            for action in &scenario.actions {
                let marker = if action.critical { "*" } else { " " };
                println!("  {marker} {:<12} {}", action.id, action.label);
            }
            println!("(* critical)");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scenario.actions)?);
        }
    }
    Ok(())
}
