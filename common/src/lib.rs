//! Price Compare Common Library
//!
//! Core of the Marlin / Website price comparison, shared by the CLI:
//! column auto-detection, price cleaning, reconciliation and report output.

pub mod error;
pub mod normalize;
pub mod vocabulary;
pub mod matcher;
pub mod workbook;
pub mod detect;
pub mod price;
pub mod reconcile;
pub mod report;
#[cfg(feature = "excel")]
pub mod template;
#[cfg(feature = "excel")]
pub mod pipeline;

pub use error::{Error, Result};
pub use normalize::normalize_header;
pub use vocabulary::Vocabulary;
pub use matcher::{best_match_column, ColumnMatch};
pub use workbook::{CellValue, RawTable, Workbook};
pub use detect::{select_sheet, Detection, DetectionResult, RawPriceRow, CODE_LABEL, PRICE_LABEL};
pub use price::{clean_prices, coerce_price, PriceList, PriceRecord};
pub use reconcile::{reconcile, Comparison, MatchStatus, MergedRecord, DEFAULT_TOLERANCE};
pub use report::{Report, ReportView, Summary, SummaryValue};
#[cfg(feature = "excel")]
pub use pipeline::{compare_workbooks, detect_workbook, CompareOptions, ComparisonOutcome, SideDetection};
#[cfg(feature = "excel")]
pub use template::{template_bytes, template_file_name};
