//! Logging setup.
//!
//! The subscriber configuration is derived entirely from the CLI's global
//! flags: `-v`/`-q` pick the level, `--color` the ANSI behavior, and
//! `--log-format` switches stderr logs to JSONL. `CODEBLUE_LOG_LEVEL`
//! overrides the computed level with a full tracing filter directive.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice, OutputFormat};

/// Environment variable carrying a tracing filter directive.
pub const LOG_LEVEL_ENV: &str = "CODEBLUE_LOG_LEVEL";

/// Subscriber settings resolved from the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Default level directive when [`LOG_LEVEL_ENV`] is unset.
    pub directive: &'static str,
    /// Emit JSONL instead of the human format.
    pub json: bool,
    /// Use ANSI colors (human format only).
    pub ansi: bool,
    /// Include the module target in each line.
    pub show_target: bool,
}

impl LogOptions {
    /// Derives settings from the parsed CLI.
    ///
    /// `--quiet` drops to errors only and takes precedence over `-v`;
    /// otherwise each `-v` raises the level one step, from warn at zero up
    /// to trace. Targets appear from `-vv` on, where the module becomes
    /// useful context. Color is auto-detected from the stderr terminal
    /// unless forced, and `NO_COLOR` always wins over auto.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let directive = if cli.quiet {
            "error"
        } else {
            match cli.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        let ansi = match cli.color {
            ColorChoice::Auto => {
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Self {
            directive,
            json: cli.log_format == OutputFormat::Json,
            ansi,
            show_target: cli.verbose >= 2,
        }
    }
}

/// Installs the global tracing subscriber on stderr.
///
/// Uses `try_init()`, so repeated calls (e.g. across tests) are harmless.
pub fn init_logging(options: &LogOptions) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(options.directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(options.show_target)
        .with_writer(std::io::stderr);

    if options.json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.with_ansi(options.ansi).try_init();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["codeblue"];
        full.extend_from_slice(args);
        full.extend_from_slice(&["actions", "--scenario", "s.yaml"]);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn default_flags_give_warn_human() {
        let options = LogOptions::from_cli(&parse(&["--color", "never"]));
        assert_eq!(options.directive, "warn");
        assert!(!options.json);
        assert!(!options.ansi);
        assert!(!options.show_target);
    }

    #[test]
    fn verbosity_steps_up_to_trace() {
        assert_eq!(LogOptions::from_cli(&parse(&["-v"])).directive, "info");
        assert_eq!(LogOptions::from_cli(&parse(&["-vv"])).directive, "debug");
        assert_eq!(LogOptions::from_cli(&parse(&["-vvv"])).directive, "trace");
        assert_eq!(LogOptions::from_cli(&parse(&["-vvvvvv"])).directive, "trace");
    }

    #[test]
    fn quiet_beats_verbose() {
        let options = LogOptions::from_cli(&parse(&["-q", "-vvv"]));
        assert_eq!(options.directive, "error");
    }

    #[test]
    fn targets_appear_from_double_verbose() {
        assert!(!LogOptions::from_cli(&parse(&["-v"])).show_target);
        assert!(LogOptions::from_cli(&parse(&["-vv"])).show_target);
    }

    #[test]
    fn log_format_flag_selects_json() {
        let options = LogOptions::from_cli(&parse(&["--log-format", "json"]));
        assert!(options.json);
    }

    #[test]
    fn forced_color_choices() {
        assert!(LogOptions::from_cli(&parse(&["--color", "always"])).ansi);
        assert!(!LogOptions::from_cli(&parse(&["--color", "never"])).ansi);
    }

    #[test]
    fn init_is_idempotent() {
        let options = LogOptions::from_cli(&parse(&["--color", "never"]));
        init_logging(&options);
        init_logging(&LogOptions::from_cli(&parse(&["--log-format", "json"])));
    }
}
