//! CLI module for car diagnostics
//!
//! Command-line interface for running diagnostics on car record files and
//! inspecting the required inventory.

pub mod commands;
pub mod output;

pub use commands::{DiagnoseCli, DiagnoseCommands};
pub use output::{OutputFormat, ReportOutput};

use crate::error::{CliError, Result};

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every diagnostic stage passed
    Success = 0,
    /// A diagnostic stage failed
    DiagnosticsFailed = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a diagnostic outcome
    pub fn from_report(passed: bool) -> Self {
        if passed {
            ExitCode::Success
        } else {
            ExitCode::DiagnosticsFailed
        }
    }

    /// Determine exit code for an error that aborted the run
    pub fn from_error(err: &CliError) -> Self {
        match err {
            CliError::FileError(_) => ExitCode::FileError,
            _ if err.is_user_error() => ExitCode::InvalidInput,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: DiagnoseCli) -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        DiagnoseCommands::Diagnose {
            car,
            inventory,
            format,
        } => commands::execute_diagnose(&car, inventory.as_deref(), format, cli.quiet, &mut stdout),
        DiagnoseCommands::Inventory { inventory, format } => {
            commands::execute_inventory(inventory.as_deref(), format, cli.quiet, &mut stdout)
        }
    }
}
