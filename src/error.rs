use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceCompareError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Comparison failed: {0}")]
    Compare(#[from] price_compare_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PriceCompareError>;
