//! CLI argument definitions.
//!
//! All Clap derive structs for `chantier` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Construction-phase training quiz over a 3D building model.
#[derive(Parser, Debug)]
#[command(name = "chantier", author, version, about)]
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

    /// Log output format.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "CHANTIER_LOG_FORMAT"
    )]
    pub log_format: LogFormatChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a model inventory into construction phases.
    Classify(ClassifyArgs),

    /// Validate mapping documents without loading a model.
    Validate(ValidateArgs),

    /// Play a scripted quiz session against a model inventory.
    Play(PlayArgs),
}

// ============================================================================
// Classify
// ============================================================================

/// Arguments for `classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the model inventory JSON (pickable entities).
    pub model: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Write the mapping document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// Validate
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Mapping documents to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Play
// ============================================================================

/// Arguments for `play`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the model inventory JSON (pickable entities).
    pub model: PathBuf,

    /// Path to a session script (JSON array of steps).
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Import this mapping document instead of the built-in classifier.
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Seed for the target draw; omitted means OS entropy.
    #[arg(long, env = "CHANTIER_SEED")]
    pub seed: Option<u64>,

    /// Game duration in seconds.
    #[arg(long, default_value_t = 360)]
    pub duration: i64,

    /// Milliseconds per game tick; lower values fast-forward the clock.
    #[arg(long, default_value_t = 1000)]
    pub tick_millis: u64,

    /// Write the session CSV to this file instead of stdout.
    #[arg(long)]
    pub csv_out: Option<PathBuf>,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Log format choice mirroring [`crate::observability::LogFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatChoice {
    /// Human-readable logs.
    #[default]
    Human,
    /// Newline-delimited JSON logs.
    Json,
}

/// Output format for structured command output.
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
