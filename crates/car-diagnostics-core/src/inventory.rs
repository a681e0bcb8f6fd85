//! Required part inventory
//!
//! The minimum number of installed parts per category a fully equipped car
//! must carry. The engine receives it at construction so the table can come
//! from a configuration file instead of being fixed in code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DiagnosticError, Result};
use crate::part::PartType;

/// Mapping from part category to its required count
///
/// Every stored count is greater than zero. Categories absent from the
/// table are not required and are ignored by the inventory check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<PartType, u32>", into = "BTreeMap<PartType, u32>")]
pub struct RequiredInventory {
    counts: BTreeMap<PartType, u32>,
}

impl Default for RequiredInventory {
    fn default() -> Self {
        let counts = [
            (PartType::Engine, 1),
            (PartType::Electrical, 1),
            (PartType::FuelFilter, 1),
            (PartType::OilFilter, 1),
            (PartType::Tire, 4),
        ]
        .into_iter()
        .collect();
        Self { counts }
    }
}

impl RequiredInventory {
    /// Build an inventory from `(category, count)` pairs
    ///
    /// A repeated category keeps its last count. Zero counts are rejected.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartType, u32)>,
    {
        let counts: BTreeMap<PartType, u32> = pairs.into_iter().collect();
        if let Some((part_type, _)) = counts.iter().find(|(_, count)| **count == 0) {
            return Err(DiagnosticError::invalid_config(format!(
                "required count for {} must be greater than 0",
                part_type
            )));
        }
        Ok(Self { counts })
    }

    /// Required count for a category, 0 when it is not required
    pub fn required(&self, part_type: PartType) -> u32 {
        self.counts.get(&part_type).copied().unwrap_or(0)
    }

    pub fn is_required(&self, part_type: PartType) -> bool {
        self.counts.contains_key(&part_type)
    }

    /// Iterate over `(category, count)` in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (PartType, u32)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of parts a compliant car carries
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl TryFrom<BTreeMap<PartType, u32>> for RequiredInventory {
    type Error = DiagnosticError;

    fn try_from(counts: BTreeMap<PartType, u32>) -> Result<Self> {
        Self::from_pairs(counts)
    }
}

impl From<RequiredInventory> for BTreeMap<PartType, u32> {
    fn from(inventory: RequiredInventory) -> Self {
        inventory.counts
    }
}
