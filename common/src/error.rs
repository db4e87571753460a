//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Could not detect suitable columns in any sheet.")]
    NoSuitableSheet,

    #[error(
        "Auto-detection incomplete in sheet '{sheet}'. Found code column: {}, price column: {}",
        found(.code_column),
        found(.price_column)
    )]
    DetectionIncomplete {
        sheet: String,
        code_column: Option<String>,
        price_column: Option<String>,
    },

    #[error("{side} file: {source}")]
    Side {
        side: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("Report error: {0}")]
    Report(String),
}

fn found(column: &Option<String>) -> &str {
    column.as_deref().unwrap_or("None")
}

impl Error {
    /// Attach the input side ("Marlin" / "Website") to an error.
    pub fn for_side(self, side: &'static str) -> Self {
        Error::Side {
            side,
            source: Box::new(self),
        }
    }

    /// True for failures of the sheet/column auto-detection.
    pub fn is_detection_failure(&self) -> bool {
        match self {
            Error::NoSuitableSheet | Error::DetectionIncomplete { .. } => true,
            Error::Side { source, .. } => source.is_detection_failure(),
            _ => false,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
