//! Logging initialization.
//!
//! Structured logging via `tracing` with human-readable and JSON
//! output formats, configurable verbosity, and environment-based
//! override via `CHANTIER_LOG_LEVEL`. Logs go to stderr; stdout is
//! reserved for command output (CSV, JSON documents).

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps verbosity flags to a tracing directive string.
///
/// - quiet → `"error"`
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// If `CHANTIER_LOG_LEVEL` is set it takes precedence over the
/// verbosity flags. ANSI colors are used only when stderr is a
/// terminal and `NO_COLOR` is unset.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(format: LogFormat, verbosity: u8, quiet: bool) {
    let default_directive = verbosity_to_directive(verbosity, quiet);

    let filter = EnvFilter::try_from_env("CHANTIER_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let show_target = verbosity >= 2;
    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_default_is_human() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn init_logging_does_not_panic() {
        // try_init is idempotent — repeated calls simply return Err and are ignored
        init_logging(LogFormat::Human, 0, false);
        init_logging(LogFormat::Json, 3, true);
    }

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(verbosity_to_directive(3, true), "error");
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(verbosity_to_directive(0, false), "warn");
        assert_eq!(verbosity_to_directive(1, false), "info");
        assert_eq!(verbosity_to_directive(2, false), "debug");
        assert_eq!(verbosity_to_directive(3, false), "trace");
        assert_eq!(verbosity_to_directive(255, false), "trace");
    }
}
