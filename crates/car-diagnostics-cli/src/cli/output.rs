//! Output formatting for the car diagnostics CLI
//!
//! `text` prints the report lines exactly as the engine words them. `table`
//! adds a colored summary, and `json`/`yaml` serialize the full report.

use car_diagnostics_core::{
    Car, DiagnosticReport, Finding, Outcome, RequiredInventory, Stage,
};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CliError, Result};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Plain report lines, one per message or finding
    #[default]
    Text,
    /// Human-readable table format with colors
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Diagnostic output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Whether every stage passed
    pub passed: bool,
    /// Short description of the record, when one was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
    pub outcome: Outcome,
    /// Stage that stopped the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<Stage>,
    pub findings: Vec<Finding>,
    /// The report lines as printed in text mode
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ReportOutput {
    /// Create output from a diagnostic report
    pub fn from_report(report: &DiagnosticReport, car: Option<&Car>) -> Self {
        Self {
            passed: report.is_success(),
            car: car.map(ToString::to_string),
            outcome: report.outcome.clone(),
            failed_stage: report.failed_stage(),
            findings: report.findings.clone(),
            messages: report.lines(),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Render output in the specified format
    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => self.render_text(out),
            OutputFormat::Table => self.render_table(out),
            OutputFormat::Json => render_json(self, out),
            OutputFormat::Yaml => render_yaml(self, out),
        }
    }

    fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for message in &self.messages {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }

    fn render_table<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "Diagnostic Results".cyan().bold())?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out)?;

        if let Some(car) = &self.car {
            writeln!(out, "{} {}", "Car:".dimmed(), car)?;
        }
        match self.failed_stage {
            Some(stage) => writeln!(
                out,
                "{} Stopped at {}",
                "x".red(),
                stage.to_string().red().bold()
            )?,
            None => writeln!(out, "{} All stages passed", "+".green())?,
        }
        writeln!(out)?;

        if self.findings.is_empty() {
            for message in &self.messages {
                let line = if self.passed {
                    message.green()
                } else {
                    message.red()
                };
                writeln!(out, "  {}", line)?;
            }
        } else {
            writeln!(out, "{}", "Findings:".cyan().bold())?;
            writeln!(out, "{}", "-".repeat(60))?;
            for (finding, message) in self.findings.iter().zip(&self.messages) {
                let icon = match finding {
                    Finding::MissingPart { .. } => "!".yellow(),
                    Finding::DamagedPart { .. } => "x".red(),
                };
                writeln!(out, "{} [{}] {}", icon, finding.code().dimmed(), message)?;
            }
        }

        if let Some(duration) = self.duration_ms {
            writeln!(out)?;
            writeln!(out, "Completed in {} ms", duration.to_string().dimmed())?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Render the effective required-inventory table
pub fn render_inventory<W: Write>(
    inventory: &RequiredInventory,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (part_type, count) in inventory.iter() {
                writeln!(out, "{}: {}", part_type, count)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "{}", "Required Inventory".cyan().bold())?;
            writeln!(out, "{}", "-".repeat(30))?;
            for (part_type, count) in inventory.iter() {
                writeln!(out, "  {:<14} {}", part_type.to_string().bold(), count)?;
            }
            writeln!(out, "{}", "-".repeat(30))?;
            writeln!(out, "  {:<14} {}", "TOTAL", inventory.total())?;
            Ok(())
        }
        OutputFormat::Json => render_json(inventory, out),
        OutputFormat::Yaml => render_yaml(inventory, out),
    }
}

fn render_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::SerializationError(e.to_string()))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn render_yaml<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let yaml = serde_yaml::to_string(value)
        .map_err(|e| CliError::SerializationError(e.to_string()))?;
    write!(out, "{}", yaml)?;
    Ok(())
}
