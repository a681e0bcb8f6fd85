//! Car Diagnostics CLI
//!
//! # Exit Codes
//!
//! - 0: Success - every diagnostic stage passed
//! - 1: A diagnostic stage failed
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use car_diagnostics_cli::{run_cli, DiagnoseCli};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = DiagnoseCli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr so the report on stdout stays exact
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
