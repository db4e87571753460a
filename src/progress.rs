//! Console progress text for the compare and detect commands

use price_compare_common::PriceList;

/// Number of steps of a compare run
pub const COMPARE_STEPS: usize = 4;

/// Step marker line, e.g. `[1/4] Reading workbooks...`
pub fn step(n: usize, message: &str) -> String {
    format!("[{}/{}] {}", n, COMPARE_STEPS, message)
}

/// Preview table of the first `rows` cleaned records
pub fn preview_lines(prices: &PriceList, rows: usize) -> Vec<String> {
    let mut lines = vec![format!("  {:<24} {}", "Variant Code", "Variant Price")];
    for record in prices.iter().take(rows) {
        let price = record
            .price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("  {:<24} {}", record.code, price));
    }
    if prices.len() > rows {
        lines.push(format!("  ... {} more", prices.len() - rows));
    }
    lines
}
