use crate::error::{PriceCompareError, Result};
use std::path::Path;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// Read an uploaded workbook into memory
pub fn read_workbook_file(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(PriceCompareError::FileNotFound(path.display().to_string()));
    }

    if !is_workbook_extension(path) {
        tracing::warn!(path = %path.display(), "unexpected file extension, trying to read anyway");
    }

    Ok(std::fs::read(path)?)
}

fn is_workbook_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WORKBOOK_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
