//! Price coercion and table cleaning
//!
//! Unparseable prices become absent, never zero and never an error.
//! This silently drops bad cells from the comparison; callers see them
//! as "N/A" rows rather than as failures.

use crate::detect::RawPriceRow;
use crate::workbook::CellValue;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// A cleaned (code, price) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub code: String,
    pub price: Option<f64>,
}

/// Cleaned price table: unique codes, last occurrence wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceList {
    records: Vec<PriceRecord>,
}

impl PriceList {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceRecord> {
        self.records.iter()
    }

    pub fn get(&self, code: &str) -> Option<&PriceRecord> {
        self.records.iter().find(|r| r.code == code)
    }
}

impl FromIterator<PriceRecord> for PriceList {
    /// Later duplicates replace earlier ones and take their position
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        let all: Vec<PriceRecord> = iter.into_iter().collect();

        let mut last_index: HashMap<&str, usize> = HashMap::new();
        for (i, record) in all.iter().enumerate() {
            last_index.insert(record.code.as_str(), i);
        }

        let keep: Vec<bool> = all
            .iter()
            .enumerate()
            .map(|(i, r)| last_index.get(r.code.as_str()) == Some(&i))
            .collect();

        let records = all
            .into_iter()
            .zip(keep)
            .filter_map(|(record, keep)| keep.then_some(record))
            .collect();

        Self { records }
    }
}

/// Parse a raw price cell.
///
/// - `(12.50)` is negative
/// - currency symbols, commas and spaces are dropped
/// - with several periods only the last one is the decimal point
pub fn coerce_price(cell: &CellValue) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref STRIP_RE: Regex = Regex::new(r"[^\d.\-]").unwrap();
    }

    let text = match cell {
        CellValue::Missing => return None,
        CellValue::Number(n) => return Some(*n),
        CellValue::Text(s) => s,
    };

    let negative = text.contains('(') && text.contains(')');
    let mut digits: String = STRIP_RE
        .replace_all(text, "")
        .chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect();

    if digits.matches('.').count() > 1 {
        if let Some(pos) = digits.rfind('.') {
            let (left, right) = digits.split_at(pos);
            digits = format!("{}{}", left.replace('.', ""), right);
        }
    }

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(if negative { -value } else { value }),
        _ => {
            tracing::trace!(raw = %text, "unparseable price");
            None
        }
    }
}

/// ASCII form of any Unicode decimal digit ('１' -> '1', '٣' -> '3')
fn ascii_digit(c: char) -> Option<char> {
    lazy_static::lazy_static! {
        static ref DECIMAL_RE: Regex = Regex::new(r"^\d$").unwrap();
    }

    if c.is_ascii_digit() {
        return Some(c);
    }
    let is_decimal = |c: char| DECIMAL_RE.is_match(c.encode_utf8(&mut [0u8; 4]));
    if !is_decimal(c) {
        return None;
    }

    // decimal digits come in contiguous runs that start at zero
    let mut offset = 0u32;
    let mut code_point = c as u32;
    while let Some(prev) = code_point.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        offset += 1;
        code_point -= 1;
    }
    char::from_digit(offset % 10, 10)
}

/// Trim codes, coerce prices, drop code-less rows and de-duplicate.
pub fn clean_prices(rows: &[RawPriceRow]) -> PriceList {
    let mut unparsed = 0usize;

    let list: PriceList = rows
        .iter()
        .filter_map(|row| {
            let code = row.code.as_text()?.trim().to_string();
            if code.is_empty() {
                return None;
            }
            let price = coerce_price(&row.price);
            if price.is_none() && !row.price.is_missing() {
                unparsed += 1;
            }
            Some(PriceRecord { code, price })
        })
        .collect();

    if unparsed > 0 {
        tracing::debug!(unparsed, "price cells treated as absent");
    }
    list
}
