//! Car Diagnostics CLI
//!
//! Process-level entry point around [`car_diagnostics_core`]: loads a car
//! record from a JSON, YAML, TOML or XML document, runs the diagnostic engine
//! once and renders the report.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Diagnose a car record
//! car-diagnose diagnose --car sample-car.json
//!
//! # Use a custom required inventory and machine-readable output
//! car-diagnose diagnose --car truck.yaml --inventory six-tires.yaml --format json
//!
//! # Show the required inventory in effect
//! car-diagnose inventory
//! ```

pub mod cli;
pub mod error;
pub mod loader;

pub use cli::{DiagnoseCli, DiagnoseCommands, ExitCode, OutputFormat, ReportOutput};
pub use error::CliError;

/// Run the CLI application
///
/// Load failures are reported on stderr and mapped to an exit code distinct
/// from a failed diagnosis.
pub fn run_cli(cli: DiagnoseCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Diagnostics aborted");
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
