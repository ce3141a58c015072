//! CLI argument definitions.
//!
//! The check list and its order are fixed; no flag changes what runs. The
//! only switches control logging, which goes to stderr so stdout stays a
//! clean JSON report.

use clap::Parser;

/// Ragcheck - Environment health checks for local RAG development stacks.
#[derive(Debug, Parser)]
#[command(name = "ragcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(long)]
    pub debug: bool,

    /// Suppress all logging
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}
