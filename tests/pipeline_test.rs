//! End-to-end comparison tests
//!
//! Builds Marlin/Website workbooks in memory, runs the full pipeline and
//! reads the report back.

mod common;

use common::{price_list, workbook_bytes, Blank, Number, Text};
use price_compare_common::report::{ONLY_MARLIN_SHEET, ONLY_WEBSITE_SHEET, SUMMARY_SHEET};
use price_compare_common::{
    compare_workbooks, detect_workbook, CellValue, CompareOptions, Comparison, MatchStatus, Workbook,
};

fn scenario() -> (Vec<u8>, Vec<u8>) {
    let marlin = price_list("Marlin", ["Variant Code", "Variant Price"], &[("A1", 10.0), ("A2", 20.0)]);
    let website = price_list("Products", ["SKU", "Price Inc GST"], &[("A1", 10.0), ("A3", 5.0)]);
    (marlin, website)
}

#[test]
fn test_compare_scenario() {
    let (marlin, website) = scenario();
    let outcome = compare_workbooks(&marlin, &website, &CompareOptions::default())
        .expect("comparison failed");

    let rows: Vec<(&str, MatchStatus, Comparison)> = outcome
        .merged
        .iter()
        .map(|r| (r.code.as_str(), r.match_status, r.comparison))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("A1", MatchStatus::Match, Comparison::Equal),
            ("A2", MatchStatus::NotApplicable, Comparison::OnlyInMarlin),
            ("A3", MatchStatus::NotApplicable, Comparison::OnlyInWebsite),
        ]
    );

    let summary = &outcome.report.summary;
    assert_eq!(summary.count("Matches"), Some(1));
    assert_eq!(summary.count("Mismatches"), Some(0));
    assert_eq!(summary.count("Only in Website"), Some(1));
    assert_eq!(summary.count("Only in Marlin"), Some(1));

    assert_eq!(outcome.website.result.sheet, "Products");
    assert_eq!(outcome.website.result.code_column, "SKU");
    assert_eq!(outcome.website.result.price_column, "Price Inc GST");
}

#[test]
fn test_report_workbook_contents() {
    let (marlin, website) = scenario();
    let outcome = compare_workbooks(&marlin, &website, &CompareOptions::default()).unwrap();

    let report = Workbook::from_bytes(&outcome.report_bytes).expect("report unreadable");
    let names: Vec<&str> = report.sheets.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["Full Data", "Matched", "Mismatched", "Only in Website", "Only in Marlin", "Summary"]
    );

    let full = report.sheet("Full Data").unwrap();
    assert_eq!(
        full.headers,
        vec![
            "Variant Code",
            "Variant Price_Website",
            "Variant Price_Marlin",
            "Price Difference",
            "Price Match",
            "Comparison",
        ]
    );
    assert_eq!(full.rows.len(), 3);
    // A2 has no website price or difference
    assert_eq!(full.rows[1][0], CellValue::from("A2"));
    assert_eq!(full.rows[1][1], CellValue::Missing);
    assert_eq!(full.rows[1][2], CellValue::from("20"));
    assert_eq!(full.rows[1][3], CellValue::Missing);
    assert_eq!(full.rows[1][4], CellValue::from("N/A"));
    assert_eq!(full.rows[1][5], CellValue::from("Only in Marlin"));

    // header-only sheet still has its header row
    let mismatched = report.sheet("Mismatched").unwrap();
    assert!(mismatched.rows.is_empty());

    assert_eq!(report.sheet(ONLY_WEBSITE_SHEET).unwrap().rows.len(), 1);
    assert_eq!(report.sheet(ONLY_MARLIN_SHEET).unwrap().rows.len(), 1);

    let summary = report.sheet(SUMMARY_SHEET).unwrap();
    assert_eq!(summary.headers, vec!["Metric", "Value"]);
    assert_eq!(summary.rows.len(), 12);
    assert_eq!(summary.rows[0], vec![CellValue::from("Detected Marlin sheet"), CellValue::from("Marlin")]);
    assert_eq!(summary.rows[8], vec![CellValue::from("Matches"), CellValue::from("1")]);
}

#[test]
fn test_compare_is_idempotent() {
    let (marlin, website) = scenario();
    let first = compare_workbooks(&marlin, &website, &CompareOptions::default()).unwrap();
    let second = compare_workbooks(&marlin, &website, &CompareOptions::default()).unwrap();

    assert_eq!(first.merged, second.merged);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_compare_tolerance_option() {
    let marlin = price_list("Sheet1", ["SKU", "Price"], &[("A1", 10.0)]);
    let website = price_list("Sheet1", ["SKU", "Price"], &[("A1", 10.4)]);

    let strict = compare_workbooks(&marlin, &website, &CompareOptions::default()).unwrap();
    assert_eq!(strict.merged[0].comparison, Comparison::WebsiteHigher);
    assert_eq!(strict.report.summary.count("Mismatches"), Some(1));

    let loose = compare_workbooks(&marlin, &website, &CompareOptions { tolerance: 0.5 }).unwrap();
    assert_eq!(loose.merged[0].comparison, Comparison::Equal);
}

#[test]
fn test_detect_messy_workbook() {
    let bytes = workbook_bytes(&[
        ("README", vec![vec![Text("Instructions")], vec![Text("See the Stock sheet")]]),
        (
            "Stock",
            vec![
                vec![Text("Item Code"), Blank, Text("RRP Ex GST"), Text("RRP Inc GST"), Text("Notes")],
                vec![Number(1001.0), Blank, Text("$9.09"), Text("$10.00"), Text("x")],
                vec![Blank, Blank, Blank, Blank, Blank],
                vec![Text(" 1002 "), Blank, Text("(1.00)"), Text("1,234.50"), Blank],
                vec![Text("1003"), Blank, Blank, Text("call"), Blank],
            ],
        ),
    ]);

    let side = detect_workbook(&bytes).expect("detection failed");
    assert_eq!(side.result.sheet, "Stock");
    assert_eq!(side.result.code_column, "Item Code");
    assert_eq!(side.result.price_column, "RRP Inc GST");
    assert_eq!(side.result.confidence, 2.5);

    let codes: Vec<&str> = side.prices.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["1001", "1002", "1003"]);
    assert_eq!(side.prices.get("1001").unwrap().price, Some(10.0));
    assert_eq!(side.prices.get("1002").unwrap().price, Some(1234.5));
    assert_eq!(side.prices.get("1003").unwrap().price, None);
}
