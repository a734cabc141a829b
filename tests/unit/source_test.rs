//! Tests for wheel sources (JSON and TOML adapters) and the measure service

use serde_json::json;
use wheelhouse::adapters::toml::{format_wheels_file, parse, write_wheels_file};
use wheelhouse::adapters::{JsonWheelSource, TomlWheelSource};
use wheelhouse::core::models::{Field, InputError, Policy, Wheel};
use wheelhouse::core::ports::WheelSource;
use wheelhouse::core::services::measure;

use crate::common::{MockWheelSource, TestDir, row};

// =============================================================================
// JSON
// =============================================================================

#[test]
fn json_rows_keep_raw_values() {
    let rows = JsonWheelSource::new("[[100, 20], [\"x\", null]]").rows().unwrap();
    assert_eq!(rows, vec![vec![json!(100), json!(20)], vec![json!("x"), json!(null)]]);
}

#[test]
fn json_non_array_document_is_rejected() {
    let err = JsonWheelSource::new("{\"data\": []}").rows().unwrap_err();
    assert!(err.to_string().contains("JSON array"));
}

#[test]
fn json_syntax_error_is_reported() {
    let err = JsonWheelSource::new("[[1, 2]").rows().unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

// =============================================================================
// TOML
// =============================================================================

#[test]
fn toml_parse_reads_data_rows() {
    let file = parse("data = [[100, 20], [50, 10.5]]").unwrap();
    assert_eq!(file.data, vec![json!([100, 20]), json!([50, 10.5])]);
}

#[test]
fn toml_missing_data_means_no_rows() {
    let file = parse("# nothing here\n").unwrap();
    assert!(file.data.is_empty());
}

#[test]
fn toml_mixed_row_survives_parsing() {
    let file = parse("data = [[1, \"wide\"]]").unwrap();
    assert_eq!(file.data[0], json!([1, "wide"]));
}

#[test]
fn toml_scalar_row_reports_arity_like_json() {
    let dir = TestDir::new();
    let path = dir.write("wheels.toml", "data = [[1, 2], 3]\n");

    let toml_err = measure(&TomlWheelSource::new(path), Policy::Lenient).unwrap_err();
    assert_eq!(
        toml_err.downcast_ref::<InputError>(),
        Some(&InputError::WrongArity { row: 1, found: 1 })
    );

    let json_err = measure(&JsonWheelSource::new("[[1, 2], 3]"), Policy::Lenient).unwrap_err();
    assert_eq!(toml_err.downcast_ref::<InputError>(), json_err.downcast_ref::<InputError>());
}

#[test]
fn toml_nan_cell_is_not_a_finite_number() {
    let dir = TestDir::new();
    let path = dir.write("wheels.toml", "data = [[nan, 1], [1, inf]]\n");

    let err = measure(&TomlWheelSource::new(path), Policy::Lenient).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::NotNumeric { row: 0, field: Field::Rim, .. })
    ));
    assert!(format!("{err:#}").contains("rim is not a finite number"));
}

#[test]
fn toml_source_reads_file() {
    let dir = TestDir::new();
    let path = dir.write("wheels.toml", "data = [[100, 20], [50, 10]]\n");

    let source = TomlWheelSource::new(path.clone());
    assert_eq!(source.path(), path.as_path());
    assert_eq!(source.describe(), path.display().to_string());

    let wheels = measure(&source, Policy::Lenient).unwrap();
    assert_eq!(wheels.diameters(), vec![140.0, 70.0]);
}

#[test]
fn toml_source_missing_file_names_path() {
    let dir = TestDir::new();
    let source = TomlWheelSource::new(dir.path().join("absent.toml"));

    let err = source.rows().unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn toml_source_invalid_toml_is_error() {
    let dir = TestDir::new();
    let path = dir.write("wheels.toml", "data = [[1, 2]\n");
    assert!(TomlWheelSource::new(path).rows().is_err());
}

#[test]
fn written_file_reads_back() {
    let dir = TestDir::new();
    let path = dir.path().join("wheels.toml");
    let wheels = [Wheel::new(100.0, 20.0), Wheel::new(26.5, 1.25)];

    write_wheels_file(&path, &wheels).unwrap();

    let loaded = measure(&TomlWheelSource::new(path), Policy::Lenient).unwrap();
    assert_eq!(loaded.wheels(), &wheels);
}

#[test]
fn large_values_read_back() {
    let dir = TestDir::new();
    let path = dir.path().join("wheels.toml");
    let wheels = [Wheel::new(1e20, 1.0), Wheel::new(-3.5e300, 9_007_199_254_740_993.0)];

    write_wheels_file(&path, &wheels).unwrap();

    let loaded = measure(&TomlWheelSource::new(path), Policy::Lenient).unwrap();
    assert_eq!(loaded.wheels(), &wheels);
}

#[test]
fn non_finite_values_are_not_written() {
    let dir = TestDir::new();
    let path = dir.path().join("wheels.toml");

    let err = write_wheels_file(&path, &[Wheel::new(1.0, 1.0), Wheel::new(f64::INFINITY, f64::NAN)])
        .unwrap_err();
    assert!(err.to_string().contains("row 1"));
    assert!(!path.exists());

    assert!(format_wheels_file(&[Wheel::new(f64::NAN, 0.0)]).is_err());
}

#[test]
fn formatted_file_has_header_and_data() {
    let content = format_wheels_file(&[Wheel::new(100.0, 20.0)]).unwrap();
    assert!(content.starts_with("# wheelhouse data"));
    assert_eq!(parse(&content).unwrap().data, vec![json!([100.0, 20.0])]);
}

#[test]
fn formatted_empty_file_has_empty_data() {
    let content = format_wheels_file(&[]).unwrap();
    assert!(parse(&content).unwrap().data.is_empty());
}

// =============================================================================
// measure() with a mock source
// =============================================================================

#[test]
fn measure_uses_mock_rows() {
    let source = MockWheelSource::with_rows(vec![row(&[10.0, 1.0]), row(&[20.0, 2.0])]);
    let wheels = measure(&source, Policy::NonNegative).unwrap();
    assert_eq!(wheels.diameters(), vec![12.0, 24.0]);
}

#[test]
fn measure_wraps_validation_error_with_source() {
    let source = MockWheelSource::with_rows(vec![row(&[10.0, -1.0])]);
    let err = measure(&source, Policy::NonNegative).unwrap_err();

    assert!(err.to_string().contains("mock"));
    assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::Negative { row: 0, .. })));
}

#[test]
fn measure_passes_source_failure_through() {
    let err = measure(&MockWheelSource::failing(), Policy::Lenient).unwrap_err();
    assert!(err.to_string().contains("mock source failure"));
}
