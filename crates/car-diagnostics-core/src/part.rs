//! Installed parts and their closed category/condition sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional category of an installed part
///
/// The derived `Ord` follows declaration order, which is also the order in
/// which findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Engine,
    Electrical,
    Tire,
    FuelFilter,
    OilFilter,
}

impl PartType {
    /// Every category, in reporting order
    pub const ALL: [PartType; 5] = [
        PartType::Engine,
        PartType::Electrical,
        PartType::Tire,
        PartType::FuelFilter,
        PartType::OilFilter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Engine => "ENGINE",
            PartType::Electrical => "ELECTRICAL",
            PartType::Tire => "TIRE",
            PartType::FuelFilter => "FUEL_FILTER",
            PartType::OilFilter => "OIL_FILTER",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown part type: {}", s))
    }
}

/// Wear or damage state of an installed part
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    Damaged,
    Cracked,
    Flat,
    NoPower,
    WornOut,
}

impl ConditionType {
    pub const ALL: [ConditionType; 8] = [
        ConditionType::New,
        ConditionType::Good,
        ConditionType::Worn,
        ConditionType::Damaged,
        ConditionType::Cracked,
        ConditionType::Flat,
        ConditionType::NoPower,
        ConditionType::WornOut,
    ];

    /// NEW, GOOD and WORN are working conditions; everything else is damaged.
    pub fn is_working(&self) -> bool {
        matches!(self, ConditionType::New | ConditionType::Good | ConditionType::Worn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::New => "NEW",
            ConditionType::Good => "GOOD",
            ConditionType::Worn => "WORN",
            ConditionType::Damaged => "DAMAGED",
            ConditionType::Cracked => "CRACKED",
            ConditionType::Flat => "FLAT",
            ConditionType::NoPower => "NO_POWER",
            ConditionType::WornOut => "WORN_OUT",
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installed part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub condition: ConditionType,
}

impl Part {
    pub fn new(part_type: PartType, condition: ConditionType) -> Self {
        Self {
            part_type,
            condition,
        }
    }

    pub fn is_in_working_condition(&self) -> bool {
        self.condition.is_working()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.part_type, self.condition)
    }
}
