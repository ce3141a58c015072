//! Ragcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use ragcheck::cli::Cli;
use ragcheck::runner::CheckRunner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--quiet` silences everything
/// 2. `--debug` flag sets level to DEBUG
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is INFO
///
/// Logs go to stderr; stdout carries only the JSON report.
fn init_tracing(debug: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if debug {
        EnvFilter::new("ragcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ragcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("Ragcheck starting with args: {:?}", cli);

    let report = CheckRunner::new().run();

    // Individual check failures are part of the report, not of the process
    // outcome; only a serialization fault exits non-zero.
    match report.to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ragcheck: {}", err);
            ExitCode::FAILURE
        }
    }
}
