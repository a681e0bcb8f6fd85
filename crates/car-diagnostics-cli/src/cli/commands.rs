//! CLI command definitions for car diagnostics
//!
//! Clap-based commands for diagnosing a car record and inspecting the
//! required inventory in effect.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use car_diagnostics_core::DiagnosticEngine;

use super::output::{render_inventory, OutputFormat, ReportOutput};
use super::ExitCode;
use crate::error::Result;
use crate::loader;

/// Environment variable naming a required-inventory file
pub const INVENTORY_ENV: &str = "CAR_DIAGNOSE_INVENTORY";

/// Car diagnostics CLI
///
/// Check a car record for missing data, missing parts and damaged parts.
#[derive(Parser, Debug)]
#[command(name = "car-diagnose")]
#[command(about = "Car Diagnostics - Validate car records and their parts", long_about = None)]
#[command(version)]
pub struct DiagnoseCli {
    /// Log verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report and table output; only the exit code is set
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: DiagnoseCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum DiagnoseCommands {
    /// Run diagnostics on a car record
    ///
    /// Stops at the first failing stage: record data, parts inventory,
    /// then part condition.
    Diagnose {
        /// Path to the car record (json, yaml, yml, toml or xml)
        #[arg(short, long)]
        car: PathBuf,

        /// Path to a required-inventory file overriding the built-in table
        #[arg(short, long, env = INVENTORY_ENV)]
        inventory: Option<PathBuf>,

        /// Output format for the report
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the required inventory in effect
    Inventory {
        /// Path to a required-inventory file overriding the built-in table
        #[arg(short, long, env = INVENTORY_ENV)]
        inventory: Option<PathBuf>,

        /// Output format for the table
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Execute the diagnose command
pub fn execute_diagnose<W: Write>(
    car_path: &Path,
    inventory_path: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<ExitCode> {
    let start = Instant::now();

    let inventory = loader::resolve_inventory(inventory_path)?;
    let car = loader::load_car(car_path)?;

    let engine = DiagnosticEngine::new(inventory);
    let report = engine.run(car.as_ref())?;

    if !quiet {
        let output = ReportOutput::from_report(&report, car.as_ref())
            .with_duration(start.elapsed().as_millis() as u64);
        output.render(format, out)?;
    }

    Ok(ExitCode::from_report(report.is_success()))
}

/// Execute the inventory command
pub fn execute_inventory<W: Write>(
    inventory_path: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<ExitCode> {
    let inventory = loader::resolve_inventory(inventory_path)?;
    if !quiet {
        render_inventory(&inventory, format, out)?;
    }
    Ok(ExitCode::Success)
}
