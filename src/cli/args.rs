//! CLI argument definitions.
//!
//! All Clap derive structs for `codeblue` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Paramedic micro-simulation session engine.
#[derive(Parser, Debug)]
#[command(name = "codeblue", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CODEBLUE_COLOR")]
    pub color: ColorChoice,

    /// Log output format on stderr.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "CODEBLUE_LOG_FORMAT"
    )]
    pub log_format: OutputFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a scripted session through the engine and print the assessment.
    Run(RunArgs),

    /// Validate scenario files without running a session.
    Validate(ValidateArgs),

    /// List the actions a scenario offers.
    Actions(ActionsArgs),
}

// ============================================================================
// Run Command
// ============================================================================

/// Arguments for `run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the scenario YAML file.
    #[arg(short, long, env = "CODEBLUE_SCENARIO")]
    pub scenario: PathBuf,

    /// Path to a session script (duration plus timestamped actions).
    #[arg(long)]
    pub script: PathBuf,

    /// Seed for the vitals RNG (omit for OS entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play the script on a wall-clock ticker instead of instantly.
    #[arg(long)]
    pub realtime: bool,

    /// Real-time playback speed multiplier.
    #[arg(long, default_value_t = 1.0, requires = "realtime")]
    pub speed: f64,

    /// Output format for the final assessment.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Write the JSONL event stream to this file instead of discarding it.
    #[arg(long, env = "CODEBLUE_EVENTS_OUT")]
    pub events_out: Option<PathBuf>,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scenario files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Actions Command
// ============================================================================

/// Arguments for `actions`.
#[derive(Args, Debug)]
pub struct ActionsArgs {
    /// Path to the scenario YAML file.
    #[arg(short, long, env = "CODEBLUE_SCENARIO")]
    pub scenario: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
