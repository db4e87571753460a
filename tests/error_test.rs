//! Failure cases
//!
//! Detection failures must abort the run and name the offending input.

mod common;

use common::{price_list, workbook_bytes, Text};
use price_compare::error::PriceCompareError;
use price_compare::{export, input};
use price_compare_common::{compare_workbooks, detect_workbook, CompareOptions, Error};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_detect_unrelated_columns_fails() {
    let bytes = workbook_bytes(&[(
        "Sheet1",
        vec![vec![Text("Name"), Text("Description")], vec![Text("Widget"), Text("Blue")]],
    )]);

    let err = detect_workbook(&bytes).unwrap_err();
    assert!(matches!(err, Error::NoSuitableSheet));
    assert!(err.is_detection_failure());
}

#[test]
fn test_detect_incomplete_names_sheet() {
    let bytes = workbook_bytes(&[(
        "Codes",
        vec![vec![Text("SKU"), Text("Colour")], vec![Text("A1"), Text("Red")]],
    )]);

    let err = detect_workbook(&bytes).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'Codes'"), "{}", message);
    assert!(message.contains("price column: None"), "{}", message);
}

#[test]
fn test_compare_reports_failing_side() {
    let good = price_list("Sheet1", ["SKU", "Price"], &[("A1", 1.0)]);
    let bad = workbook_bytes(&[("Sheet1", vec![vec![Text("Name")], vec![Text("Widget")]])]);

    let err = compare_workbooks(&good, &bad, &CompareOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("Website file:"), "{}", err);
    assert!(err.is_detection_failure());

    let err = compare_workbooks(&bad, &good, &CompareOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("Marlin file:"), "{}", err);
}

#[test]
fn test_unreadable_bytes() {
    let err = detect_workbook(b"not a spreadsheet").unwrap_err();
    assert!(matches!(err, Error::Workbook(_)));
    assert!(!err.is_detection_failure());
}

#[test]
fn test_missing_input_file() {
    let err = input::read_workbook_file(Path::new("/nonexistent/path/marlin.xlsx")).unwrap_err();
    assert!(matches!(err, PriceCompareError::FileNotFound(_)));
}

#[test]
fn test_failed_run_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = export::report_output_path(dir.path(), "Report.xlsx");

    let good = price_list("Sheet1", ["SKU", "Price"], &[("A1", 1.0)]);
    let bad = workbook_bytes(&[("Sheet1", vec![vec![Text("Name")], vec![Text("Widget")]])]);

    let result = compare_workbooks(&good, &bad, &CompareOptions::default())
        .map_err(PriceCompareError::from)
        .and_then(|outcome| export::write_report(&outcome.report_bytes, &path));

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_error_display() {
    let errors = vec![
        PriceCompareError::Config("bad tolerance".to_string()),
        PriceCompareError::FileNotFound("marlin.xlsx".to_string()),
        PriceCompareError::Compare(Error::NoSuitableSheet),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}
