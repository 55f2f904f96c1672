//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod classify;
pub mod play;
pub mod validate;

use crate::cli::args::{Cli, Commands};
use crate::error::ChantierError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), ChantierError> {
    match cli.command {
        Commands::Classify(args) => classify::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Play(args) => play::run(&args).await,
    }
}
