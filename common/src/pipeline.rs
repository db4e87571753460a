//! Comparison pipeline
//!
//! Bytes in, report bytes out: detect -> clean -> reconcile -> assemble.
//! Nothing is returned unless every step succeeded, so a failed run never
//! yields a partial report.

use crate::detect::{select_sheet, DetectionResult};
use crate::error::Result;
use crate::price::{clean_prices, PriceList};
use crate::reconcile::{reconcile, MergedRecord, DEFAULT_TOLERANCE};
use crate::report::Report;
use crate::workbook::Workbook;

pub const MARLIN: &str = "Marlin";
pub const WEBSITE: &str = "Website";

/// Comparison options
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    /// Largest absolute difference still counted as a match
    pub tolerance: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Detection metadata and cleaned prices for one input
#[derive(Debug, Clone, PartialEq)]
pub struct SideDetection {
    pub result: DetectionResult,
    pub prices: PriceList,
}

/// Everything produced by one comparison run
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub marlin: SideDetection,
    pub website: SideDetection,
    pub merged: Vec<MergedRecord>,
    pub report: Report,
    pub report_bytes: Vec<u8>,
}

/// Detect the price table of one workbook and clean it
pub fn detect_workbook(bytes: &[u8]) -> Result<SideDetection> {
    let workbook = Workbook::from_bytes(bytes)?;
    let detection = select_sheet(&workbook)?;
    let prices = clean_prices(&detection.rows);

    tracing::debug!(
        sheet = %detection.result.sheet,
        code = %detection.result.code_column,
        price = %detection.result.price_column,
        rows = prices.len(),
        "workbook detected"
    );

    Ok(SideDetection {
        result: detection.result,
        prices,
    })
}

/// Compare a Marlin workbook with a Website workbook
pub fn compare_workbooks(
    marlin_bytes: &[u8],
    website_bytes: &[u8],
    options: &CompareOptions,
) -> Result<ComparisonOutcome> {
    let marlin = detect_workbook(marlin_bytes).map_err(|e| e.for_side(MARLIN))?;
    let website = detect_workbook(website_bytes).map_err(|e| e.for_side(WEBSITE))?;

    let merged = reconcile(&website.prices, &marlin.prices, options.tolerance);
    let report = Report::build(
        &merged,
        (&marlin.result, &marlin.prices),
        (&website.result, &website.prices),
    );
    let report_bytes = report.to_xlsx_bytes()?;

    Ok(ComparisonOutcome {
        marlin,
        website,
        merged,
        report,
        report_bytes,
    })
}
