//! Vehicle record under diagnosis
//!
//! A `Car` is read-only once built. Its queries are pure and recompute
//! their result on every call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::inventory::RequiredInventory;
use crate::part::{ConditionType, Part, PartType};

/// Identifying fields every record must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordField {
    Year,
    Make,
    Model,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Year => write!(f, "YEAR"),
            RecordField::Make => write!(f, "MAKE"),
            RecordField::Model => write!(f, "MODEL"),
        }
    }
}

/// A vehicle's identifying data and installed parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// `None` means the record carries no parts list at all, which is
    /// different from an empty list.
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Replace the parts list
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts = Some(parts.into_iter().collect());
        self
    }

    /// Append one part, creating the parts list if needed
    pub fn with_part(mut self, part_type: PartType, condition: ConditionType) -> Self {
        self.parts
            .get_or_insert_with(Vec::new)
            .push(Part::new(part_type, condition));
        self
    }

    fn field(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Year => self.year.as_deref(),
            RecordField::Make => self.make.as_deref(),
            RecordField::Model => self.model.as_deref(),
        }
    }

    /// Identifying fields that are absent or empty, in YEAR, MAKE, MODEL order
    pub fn missing_fields(&self) -> Vec<RecordField> {
        [RecordField::Year, RecordField::Make, RecordField::Model]
            .into_iter()
            .filter(|f| self.field(*f).map_or(true, str::is_empty))
            .collect()
    }

    pub fn is_field_data_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn has_parts_list(&self) -> bool {
        self.parts.is_some()
    }

    /// Installed count per category; empty when the parts list is absent
    pub fn part_counts(&self) -> BTreeMap<PartType, u32> {
        self.parts
            .iter()
            .flatten()
            .fold(BTreeMap::new(), |mut counts, part| {
                *counts.entry(part.part_type).or_insert(0) += 1;
                counts
            })
    }

    /// Shortfall per required category
    ///
    /// Satisfied and over-satisfied categories are left out, as are
    /// categories the inventory does not require. Returns `None` when the
    /// record has no parts list, since no shortfall can be computed.
    pub fn missing_parts(
        &self,
        inventory: &RequiredInventory,
    ) -> Option<BTreeMap<PartType, u32>> {
        self.parts.as_ref()?;
        let installed = self.part_counts();

        Some(
            inventory
                .iter()
                .filter_map(|(part_type, required)| {
                    let have = installed.get(&part_type).copied().unwrap_or(0);
                    (have < required).then(|| (part_type, required - have))
                })
                .collect(),
        )
    }

    /// Condition of every damaged part, keyed by category
    ///
    /// When several parts of one category are damaged, the last one in list
    /// order wins.
    pub fn non_working_parts(&self) -> BTreeMap<PartType, ConditionType> {
        self.parts
            .iter()
            .flatten()
            .filter(|part| !part.is_in_working_condition())
            .map(|part| (part.part_type, part.condition))
            .collect()
    }

    pub fn all_parts_working(&self) -> bool {
        self.parts
            .iter()
            .flatten()
            .all(Part::is_in_working_condition)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {} {}",
            show(&self.year),
            show(&self.make),
            show(&self.model)
        )?;
        match &self.parts {
            Some(parts) => write!(f, " ({} parts)", parts.len()),
            None => write!(f, " (no parts list)"),
        }
    }
}
