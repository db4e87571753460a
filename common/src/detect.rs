//! Sheet and column auto-detection
//!
//! Runs the column matcher on every sheet and keeps the sheet that most
//! confidently holds one code column and one price column.
//!
//! ## Sheet score
//! - +1 for a code column, +1 for a price column
//! - +0.5 when both were found

use crate::error::{Error, Result};
use crate::matcher::best_match_column;
use crate::vocabulary::Vocabulary;
use crate::workbook::{CellValue, Workbook};
use serde::Serialize;

/// Canonical label of the detected code column
pub const CODE_LABEL: &str = "Variant Code";
/// Canonical label of the detected price column
pub const PRICE_LABEL: &str = "Variant Price";

const FOUND_SCORE: f64 = 1.0;
const BOTH_FOUND_BONUS: f64 = 0.5;

/// Where the two fields were found
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub sheet: String,
    pub code_column: String,
    pub price_column: String,
    /// Sheet score (2.5 when both columns were found)
    pub confidence: f64,
}

/// A (code, price) row projected out of the winning sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPriceRow {
    pub code: CellValue,
    pub price: CellValue,
}

/// Detection metadata plus the two-column projection
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub result: DetectionResult,
    pub rows: Vec<RawPriceRow>,
}

struct Candidate<'a> {
    sheet: &'a str,
    code_column: Option<String>,
    price_column: Option<String>,
    score: f64,
}

/// Pick the sheet and the code/price columns of a workbook.
///
/// # Errors
/// - `NoSuitableSheet` when no sheet found either field
/// - `DetectionIncomplete` when the best sheet found only one of them
pub fn select_sheet(workbook: &Workbook) -> Result<Detection> {
    let code_vocabulary = Vocabulary::code();
    let price_vocabulary = Vocabulary::price();
    let mut best: Option<Candidate> = None;

    for (name, table) in &workbook.sheets {
        if table.is_empty() {
            tracing::debug!(sheet = %name, "skipping empty sheet");
            continue;
        }

        let columns = table.named_headers();
        let code_column = best_match_column(&columns, &code_vocabulary).map(|m| m.column);
        let price_column = best_match_column(&columns, &price_vocabulary).map(|m| m.column);

        let mut score = 0.0;
        if code_column.is_some() {
            score += FOUND_SCORE;
        }
        if price_column.is_some() {
            score += FOUND_SCORE;
        }
        if code_column.is_some() && price_column.is_some() {
            score += BOTH_FOUND_BONUS;
        }

        tracing::debug!(
            sheet = %name,
            code = ?code_column,
            price = ?price_column,
            score,
            "sheet scored"
        );

        if best.as_ref().map(|b| score > b.score).unwrap_or(true) {
            best = Some(Candidate {
                sheet: name,
                code_column,
                price_column,
                score,
            });
        }
    }

    let best = match best {
        Some(best) if best.score > 0.0 => best,
        _ => return Err(Error::NoSuitableSheet),
    };

    let (code_column, price_column) = match (best.code_column, best.price_column) {
        (Some(code), Some(price)) => (code, price),
        (code_column, price_column) => {
            return Err(Error::DetectionIncomplete {
                sheet: best.sheet.to_string(),
                code_column,
                price_column,
            })
        }
    };

    let table = workbook
        .sheet(best.sheet)
        .ok_or_else(|| Error::Workbook(format!("Sheet '{}' disappeared", best.sheet)))?;
    let code_index = column_index(table, best.sheet, &code_column)?;
    let price_index = column_index(table, best.sheet, &price_column)?;

    let rows = table
        .rows
        .iter()
        .map(|row| RawPriceRow {
            code: row.get(code_index).cloned().unwrap_or_default(),
            price: row.get(price_index).cloned().unwrap_or_default(),
        })
        .collect();

    Ok(Detection {
        result: DetectionResult {
            sheet: best.sheet.to_string(),
            code_column,
            price_column,
            confidence: best.score,
        },
        rows,
    })
}

fn column_index(table: &crate::workbook::RawTable, sheet: &str, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| Error::Workbook(format!("Column '{}' not found in sheet '{}'", column, sheet)))
}
