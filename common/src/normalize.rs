//! Header text normalization

use regex::Regex;

/// Normalize a column header into a match key.
///
/// Lowercases, trims surrounding whitespace and deletes every run of
/// non-alphanumeric characters ("Variant Price (Inc GST)" -> "variantpriceincgst").
pub fn normalize_header(header: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let lowered = header.trim().to_lowercase();
    NON_ALNUM_RE.replace_all(&lowered, "").into_owned()
}
