//! Loading car records and inventory tables from disk
//!
//! The document format is chosen from the file extension: `json`, `yaml`,
//! `yml`, `toml` or `xml`. A JSON or YAML document consisting of `null` is an
//! absent record and is handed to the engine as such.
//!
//! XML car records carry each part as attributes of a `<part>` element:
//!
//! ```xml
//! <car>
//!   <year>1987</year>
//!   <make>Chevrolet</make>
//!   <model>Camaro</model>
//!   <parts>
//!     <part type="ENGINE" condition="GOOD"/>
//!   </parts>
//! </car>
//! ```

use car_diagnostics_core::{Car, ConditionType, Part, PartType, RequiredInventory};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use crate::error::{CliError, Result};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
    Xml,
}

impl DocumentFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            "xml" => Ok(DocumentFormat::Xml),
            _ => Err(CliError::InvalidInput(format!(
                "Unsupported file format: {}. Supported formats: json, yaml, yml, toml, xml",
                extension
            ))),
        }
    }
}

/// Parse a document of the given format
pub fn parse_document<T: DeserializeOwned>(format: DocumentFormat, content: &str) -> Result<T> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
        DocumentFormat::Xml => quick_xml::de::from_str(content)?,
    };
    Ok(value)
}

/// XML shape of a car record; parts are wrapped in `<parts>`
#[derive(Debug, Deserialize)]
struct XmlCar {
    year: Option<String>,
    make: Option<String>,
    model: Option<String>,
    parts: Option<XmlParts>,
}

#[derive(Debug, Deserialize)]
struct XmlParts {
    #[serde(default)]
    part: Vec<XmlPart>,
}

#[derive(Debug, Deserialize)]
struct XmlPart {
    #[serde(rename = "@type")]
    part_type: PartType,
    #[serde(rename = "@condition")]
    condition: ConditionType,
}

impl From<XmlCar> for Car {
    fn from(xml: XmlCar) -> Self {
        Car {
            year: xml.year,
            make: xml.make,
            model: xml.model,
            parts: xml.parts.map(|parts| {
                parts
                    .part
                    .into_iter()
                    .map(|p| Part::new(p.part_type, p.condition))
                    .collect()
            }),
        }
    }
}

fn read_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CliError::FileError(format!(
            "An error occurred attempting to load {} file '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}

/// Parse a car record; `Ok(None)` is an absent record
pub fn parse_car(format: DocumentFormat, content: &str) -> Result<Option<Car>> {
    match format {
        // TOML has no null document
        DocumentFormat::Toml => parse_document::<Car>(format, content).map(Some),
        DocumentFormat::Xml => {
            parse_document::<XmlCar>(format, content).map(|car| Some(car.into()))
        }
        _ => parse_document::<Option<Car>>(format, content),
    }
}

/// Load a car record from a file
pub fn load_car(path: &Path) -> Result<Option<Car>> {
    let format = DocumentFormat::from_path(path)?;
    let content = read_file(path, "car record")?;
    let car = parse_car(format, &content)?;

    match &car {
        Some(car) => tracing::debug!(path = %path.display(), car = %car, "Loaded car record"),
        None => tracing::warn!(path = %path.display(), "Car record document is empty"),
    }
    Ok(car)
}

/// Load a required-inventory table from a file
pub fn load_inventory(path: &Path) -> Result<RequiredInventory> {
    let format = DocumentFormat::from_path(path)?;
    let content = read_file(path, "inventory")?;
    let inventory: RequiredInventory = parse_document(format, &content)?;

    tracing::debug!(
        path = %path.display(),
        categories = inventory.len(),
        "Loaded required inventory"
    );
    Ok(inventory)
}

/// Resolve the inventory: the given file, or the built-in table
pub fn resolve_inventory(path: Option<&Path>) -> Result<RequiredInventory> {
    match path {
        Some(path) => load_inventory(path),
        None => Ok(RequiredInventory::default()),
    }
}
