//! `chantier` — Construction-phase training quiz CLI

use clap::Parser;

use chantier::cli::args::{Cli, LogFormatChoice};
use chantier::cli::commands;
use chantier::error::ExitCode;
use chantier::observability::{LogFormat, init_logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatChoice::Human => LogFormat::Human,
        LogFormatChoice::Json => LogFormat::Json,
    };
    init_logging(format, cli.verbose, cli.quiet);

    // Spawn signal handler for graceful shutdown
    tokio::spawn(async {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
            _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
        }
    });

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
