//! Findings reported by the inventory and condition stages
//!
//! `report_missing` and `report_damaged` are the only way the engine builds
//! a finding. They reject arguments a correct stage can never produce, so a
//! defect in the engine surfaces as an error rather than as a bogus line in
//! the report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DiagnosticError, Result};
use crate::part::{ConditionType, PartType};

/// One reported unit of a diagnostic failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A required category is short by `count` parts
    MissingPart { part_type: PartType, count: u32 },
    /// An installed part is in a non-working condition
    DamagedPart {
        part_type: PartType,
        condition: ConditionType,
    },
}

impl Finding {
    pub fn part_type(&self) -> PartType {
        match self {
            Finding::MissingPart { part_type, .. } | Finding::DamagedPart { part_type, .. } => {
                *part_type
            }
        }
    }

    /// Short code used by the structured renderers
    pub fn code(&self) -> &'static str {
        match self {
            Finding::MissingPart { .. } => "missing-part",
            Finding::DamagedPart { .. } => "damaged-part",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingPart { part_type, count } => {
                write!(f, "Missing Part(s) Detected: {} - Count: {}", part_type, count)
            }
            Finding::DamagedPart {
                part_type,
                condition,
            } => write!(
                f,
                "Damaged Part Detected: {} - Condition: {}",
                part_type, condition
            ),
        }
    }
}

/// Build a missing-part finding
pub fn report_missing(part_type: PartType, count: u32) -> Result<Finding> {
    if count == 0 {
        return Err(DiagnosticError::contract_violation(format!(
            "missing count for {} must be greater than 0",
            part_type
        )));
    }
    Ok(Finding::MissingPart { part_type, count })
}

/// Build a damaged-part finding
pub fn report_damaged(part_type: PartType, condition: ConditionType) -> Result<Finding> {
    if condition.is_working() {
        return Err(DiagnosticError::contract_violation(format!(
            "{} is in working condition {} and cannot be reported as damaged",
            part_type, condition
        )));
    }
    Ok(Finding::DamagedPart {
        part_type,
        condition,
    })
}
