//! End-to-end tests for the diagnose and inventory commands
//!
//! Each test writes its input documents to a temporary directory and runs
//! the command against an in-memory output buffer.

use car_diagnostics_cli::cli::commands::{execute_diagnose, execute_inventory};
use car_diagnostics_cli::{CliError, ExitCode, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_CAR: &str = include_str!("../data/sample-car.json");
const SAMPLE_CAR_XML: &str = include_str!("../data/sample-car.xml");
const SIX_TIRES: &str = include_str!("../data/six-tires.yaml");

const EQUIPPED_YAML: &str = r#"
year: "2019"
make: Tesla
model: Model 3
parts:
  - { type: ENGINE, condition: NEW }
  - { type: ELECTRICAL, condition: NEW }
  - { type: FUEL_FILTER, condition: WORN }
  - { type: OIL_FILTER, condition: GOOD }
  - { type: TIRE, condition: GOOD }
  - { type: TIRE, condition: GOOD }
  - { type: TIRE, condition: GOOD }
  - { type: TIRE, condition: GOOD }
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn diagnose(car: &Path, inventory: Option<&Path>, format: OutputFormat) -> (ExitCode, String) {
    let mut out = Vec::new();
    let code = execute_diagnose(car, inventory, format, false, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_sample_car_reports_damaged_parts() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "sample-car.json", SAMPLE_CAR);

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(
        output,
        "Damaged Part Detected: ELECTRICAL - Condition: NO_POWER\n\
         Damaged Part Detected: TIRE - Condition: FLAT\n"
    );
}

#[test]
fn test_xml_sample_car_reports_damaged_parts() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "sample-car.xml", SAMPLE_CAR_XML);

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(
        output,
        "Damaged Part Detected: ELECTRICAL - Condition: NO_POWER\n\
         Damaged Part Detected: TIRE - Condition: FLAT\n"
    );
}

#[test]
fn test_xml_record_with_short_tires() {
    let dir = TempDir::new().unwrap();
    let car = write(
        &dir,
        "car.xml",
        r#"<car>
  <year>2001</year><make>Volvo</make><model>V70</model>
  <parts>
    <part type="ENGINE" condition="NEW"/>
    <part type="ELECTRICAL" condition="GOOD"/>
    <part type="FUEL_FILTER" condition="GOOD"/>
    <part type="OIL_FILTER" condition="WORN"/>
    <part type="TIRE" condition="GOOD"/>
  </parts>
</car>"#,
    );

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(output, "Missing Part(s) Detected: TIRE - Count: 3\n");
}

#[test]
fn test_equipped_car_passes() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.yaml", EQUIPPED_YAML);

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::Success);
    assert_eq!(
        output,
        "Validation is successful. Your car is ready to hit the road\n"
    );
}

#[test]
fn test_custom_inventory_from_file() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.yaml", EQUIPPED_YAML);
    let inventory = write(&dir, "six-tires.yaml", SIX_TIRES);

    let (code, output) = diagnose(&car, Some(&inventory), OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(output, "Missing Part(s) Detected: TIRE - Count: 2\n");
}

#[test]
fn test_missing_fields() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.json", r#"{"make": "Lada", "parts": []}"#);

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(output, "The following data are missing: YEAR MODEL\n");
}

#[test]
fn test_null_document_is_absent_record() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.json", "null");

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(
        output,
        "Car data is incomplete. Must have Year, Make, Model info.\n"
    );
}

#[test]
fn test_toml_record_without_parts_list() {
    let dir = TempDir::new().unwrap();
    let car = write(
        &dir,
        "car.toml",
        "year = \"1972\"\nmake = \"Citroen\"\nmodel = \"DS\"\n",
    );

    let (code, output) = diagnose(&car, None, OutputFormat::Text);
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert_eq!(output, "Car data is incomplete. The parts list is missing.\n");
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "sample-car.json", SAMPLE_CAR);

    let (_, output) = diagnose(&car, None, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["passed"], false);
    assert_eq!(value["failed_stage"], "condition_check");
    assert_eq!(value["findings"].as_array().unwrap().len(), 2);
    assert_eq!(value["car"], "1987 Chevrolet Camaro (8 parts)");
}

#[test]
fn test_quiet_suppresses_output() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "sample-car.json", SAMPLE_CAR);

    let mut out = Vec::new();
    let code = execute_diagnose(&car, None, OutputFormat::Text, true, &mut out).unwrap();
    assert_eq!(code, ExitCode::DiagnosticsFailed);
    assert!(out.is_empty());
}

#[test]
fn test_load_failure_is_distinct_from_validation_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    let mut out = Vec::new();
    let err = execute_diagnose(&missing, None, OutputFormat::Text, false, &mut out).unwrap_err();
    assert!(matches!(err, CliError::FileError(_)));
    assert_eq!(ExitCode::from_error(&err), ExitCode::FileError);
    assert!(out.is_empty());
}

#[test]
fn test_malformed_document() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.yaml", "parts:\n  - { type: WIPER, condition: GOOD }\n");

    let mut out = Vec::new();
    let err = execute_diagnose(&car, None, OutputFormat::Text, false, &mut out).unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
    assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);
}

#[test]
fn test_zero_count_inventory_rejected() {
    let dir = TempDir::new().unwrap();
    let car = write(&dir, "car.yaml", EQUIPPED_YAML);
    let inventory = write(&dir, "inventory.json", r#"{"TIRE": 0}"#);

    let mut out = Vec::new();
    let err = execute_diagnose(&car, Some(&inventory), OutputFormat::Text, false, &mut out)
        .unwrap_err();
    assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);
    assert!(err.to_string().contains("greater than 0"));
}

#[test]
fn test_inventory_command() {
    let dir = TempDir::new().unwrap();
    let inventory = write(&dir, "six-tires.yaml", SIX_TIRES);

    let mut out = Vec::new();
    let code = execute_inventory(Some(&inventory), OutputFormat::Text, false, &mut out).unwrap();
    assert_eq!(code, ExitCode::Success);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ENGINE: 1\nELECTRICAL: 1\nTIRE: 6\nFUEL_FILTER: 1\nOIL_FILTER: 1\n"
    );
}

#[test]
fn test_quiet_inventory_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let inventory = write(&dir, "six-tires.yaml", SIX_TIRES);

    let mut out = Vec::new();
    let code = execute_inventory(Some(&inventory), OutputFormat::Table, true, &mut out).unwrap();
    assert_eq!(code, ExitCode::Success);
    assert!(out.is_empty());
}

#[test]
fn test_quiet_inventory_still_rejects_bad_table() {
    let dir = TempDir::new().unwrap();
    let inventory = write(&dir, "inventory.json", r#"{"ENGINE": 0}"#);

    let mut out = Vec::new();
    let err = execute_inventory(Some(&inventory), OutputFormat::Text, true, &mut out).unwrap_err();
    assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);
}
