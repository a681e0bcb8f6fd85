//! Diagnostic engine
//!
//! Runs an ordered, short-circuiting sequence of stages over a car record:
//!
//! 1. record presence
//! 2. field completeness (all of YEAR, MAKE, MODEL are checked together)
//! 3. parts list presence
//! 4. inventory completeness against the [`RequiredInventory`]
//! 5. part condition
//!
//! The first failing stage produces the report and ends the run. A run that
//! clears every stage reports success. The engine never mutates the record
//! and keeps no state between runs, so the same input always yields the
//! same report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::car::{Car, RecordField};
use crate::error::Result;
use crate::finding::{report_damaged, report_missing, Finding};
use crate::inventory::RequiredInventory;

pub const RECORD_ABSENT_MESSAGE: &str = "Car data is incomplete. Must have Year, Make, Model info.";
pub const PARTS_LIST_ABSENT_MESSAGE: &str = "Car data is incomplete. The parts list is missing.";
pub const MISSING_FIELDS_PREFIX: &str = "The following data are missing:";
pub const SUCCESS_MESSAGE: &str = "Validation is successful. Your car is ready to hit the road";

/// A stage of the diagnostic procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    RecordPresence,
    FieldCheck,
    PartsPresence,
    InventoryCheck,
    ConditionCheck,
}

impl Stage {
    /// The stage that runs after this one passes, `None` after the last
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::RecordPresence => Some(Stage::FieldCheck),
            Stage::FieldCheck => Some(Stage::PartsPresence),
            Stage::PartsPresence => Some(Stage::InventoryCheck),
            Stage::InventoryCheck => Some(Stage::ConditionCheck),
            Stage::ConditionCheck => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::RecordPresence => write!(f, "record-presence"),
            Stage::FieldCheck => write!(f, "field-check"),
            Stage::PartsPresence => write!(f, "parts-presence"),
            Stage::InventoryCheck => write!(f, "inventory-check"),
            Stage::ConditionCheck => write!(f, "condition-check"),
        }
    }
}

/// Terminal state of a diagnostic run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    RecordAbsent,
    MissingFields(Vec<RecordField>),
    PartsListAbsent,
    MissingParts,
    DamagedParts,
    Passed,
}

impl Outcome {
    /// Stage that produced this outcome, `None` on success
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Outcome::RecordAbsent => Some(Stage::RecordPresence),
            Outcome::MissingFields(_) => Some(Stage::FieldCheck),
            Outcome::PartsListAbsent => Some(Stage::PartsPresence),
            Outcome::MissingParts => Some(Stage::InventoryCheck),
            Outcome::DamagedParts => Some(Stage::ConditionCheck),
            Outcome::Passed => None,
        }
    }
}

/// Result of one diagnostic run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub outcome: Outcome,
    /// Findings of the failing stage; only the inventory and condition
    /// stages produce any.
    pub findings: Vec<Finding>,
}

impl DiagnosticReport {
    fn new(outcome: Outcome, findings: Vec<Finding>) -> Self {
        Self { outcome, findings }
    }

    pub fn passed() -> Self {
        Self::new(Outcome::Passed, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        self.outcome.stage()
    }

    /// Human-readable report, one line per message or finding
    pub fn lines(&self) -> Vec<String> {
        match &self.outcome {
            Outcome::RecordAbsent => vec![RECORD_ABSENT_MESSAGE.to_string()],
            Outcome::MissingFields(fields) => {
                let names: Vec<String> = fields.iter().map(ToString::to_string).collect();
                vec![format!("{} {}", MISSING_FIELDS_PREFIX, names.join(" "))]
            }
            Outcome::PartsListAbsent => vec![PARTS_LIST_ABSENT_MESSAGE.to_string()],
            Outcome::MissingParts | Outcome::DamagedParts => {
                self.findings.iter().map(ToString::to_string).collect()
            }
            Outcome::Passed => vec![SUCCESS_MESSAGE.to_string()],
        }
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// The diagnostic engine
#[derive(Debug, Clone, Default)]
pub struct DiagnosticEngine {
    inventory: RequiredInventory,
}

impl DiagnosticEngine {
    /// Create an engine checking against the given required inventory
    pub fn new(inventory: RequiredInventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &RequiredInventory {
        &self.inventory
    }

    /// Run every stage in order, stopping at the first failure
    ///
    /// Problems with the record are reported through the returned
    /// [`DiagnosticReport`]. An `Err` means the engine tried to emit a
    /// finding that violates the emission contract.
    pub fn run(&self, car: Option<&Car>) -> Result<DiagnosticReport> {
        let mut stage = Some(Stage::RecordPresence);
        while let Some(current) = stage {
            tracing::debug!(stage = %current, "Running diagnostic stage");
            if let Some(report) = self.evaluate(current, car)? {
                return Ok(report);
            }
            stage = current.next();
        }

        tracing::info!("All diagnostic stages passed");
        Ok(DiagnosticReport::passed())
    }

    /// Run the diagnostics and write the report lines to `out`
    pub fn execute<W: Write>(&self, car: Option<&Car>, out: &mut W) -> Result<DiagnosticReport> {
        let report = self.run(car)?;
        for line in report.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(report)
    }

    /// Evaluate one stage; `Some` is the failing report
    ///
    /// No stage can read an absent record, so any stage given one fails as
    /// record presence.
    fn evaluate(&self, stage: Stage, car: Option<&Car>) -> Result<Option<DiagnosticReport>> {
        let Some(car) = car else {
            return Ok(Some(self.fail(
                Stage::RecordPresence,
                Outcome::RecordAbsent,
                Vec::new(),
            )));
        };

        let report = match stage {
            Stage::RecordPresence => None,
            Stage::FieldCheck => {
                let missing = car.missing_fields();
                (!missing.is_empty())
                    .then(|| self.fail(stage, Outcome::MissingFields(missing), Vec::new()))
            }
            Stage::PartsPresence => (!car.has_parts_list())
                .then(|| self.fail(stage, Outcome::PartsListAbsent, Vec::new())),
            Stage::InventoryCheck => {
                let findings = car
                    .missing_parts(&self.inventory)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(part_type, count)| report_missing(part_type, count))
                    .collect::<Result<Vec<_>>>()?;
                (!findings.is_empty()).then(|| self.fail(stage, Outcome::MissingParts, findings))
            }
            Stage::ConditionCheck => {
                let findings = car
                    .non_working_parts()
                    .into_iter()
                    .map(|(part_type, condition)| report_damaged(part_type, condition))
                    .collect::<Result<Vec<_>>>()?;
                (!findings.is_empty()).then(|| self.fail(stage, Outcome::DamagedParts, findings))
            }
        };
        Ok(report)
    }

    fn fail(&self, stage: Stage, outcome: Outcome, findings: Vec<Finding>) -> DiagnosticReport {
        tracing::info!(
            stage = %stage,
            findings = findings.len(),
            "Diagnostics stopped at failing stage"
        );
        DiagnosticReport::new(outcome, findings)
    }
}
