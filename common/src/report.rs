//! Comparison report assembly
//!
//! Splits the merged table into the five row views and builds the summary.
//! With the `excel` feature the report serializes to an xlsx buffer.

use crate::detect::DetectionResult;
use crate::price::PriceList;
use crate::reconcile::{Comparison, MatchStatus, MergedRecord};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Column headers shared by every row view
pub const REPORT_COLUMNS: [&str; 6] = [
    "Variant Code",
    "Variant Price_Website",
    "Variant Price_Marlin",
    "Price Difference",
    "Price Match",
    "Comparison",
];

/// Column headers of the summary sheet
pub const SUMMARY_COLUMNS: [&str; 2] = ["Metric", "Value"];

pub const FULL_DATA_SHEET: &str = "Full Data";
pub const MATCHED_SHEET: &str = "Matched";
pub const MISMATCHED_SHEET: &str = "Mismatched";
pub const ONLY_WEBSITE_SHEET: &str = "Only in Website";
pub const ONLY_MARLIN_SHEET: &str = "Only in Marlin";
pub const SUMMARY_SHEET: &str = "Summary";

/// A named subset of merged rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub name: &'static str,
    pub rows: Vec<MergedRecord>,
}

/// Summary value cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Text(String),
    Count(usize),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Text(s) => f.write_str(s),
            SummaryValue::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Ordered metric -> value pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub entries: Vec<(String, SummaryValue)>,
}

/// Serialized as a JSON object in metric order
impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, value) in &self.entries {
            map.serialize_entry(metric, value)?;
        }
        map.end()
    }
}

impl Summary {
    fn push(&mut self, metric: &str, value: SummaryValue) {
        self.entries.push((metric.to_string(), value));
    }

    pub fn get(&self, metric: &str) -> Option<&SummaryValue> {
        self.entries.iter().find(|(m, _)| m == metric).map(|(_, v)| v)
    }

    pub fn count(&self, metric: &str) -> Option<usize> {
        match self.get(metric) {
            Some(SummaryValue::Count(n)) => Some(*n),
            _ => None,
        }
    }
}

fn filter_view<F>(name: &'static str, merged: &[MergedRecord], keep: F) -> ReportView
where
    F: Fn(&MergedRecord) -> bool,
{
    ReportView {
        name,
        rows: merged.iter().filter(|r| keep(r)).cloned().collect(),
    }
}

/// The six views of a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub views: Vec<ReportView>,
    pub summary: Summary,
}

impl Report {
    /// Assemble the report from the merged rows and both detections
    pub fn build(
        merged: &[MergedRecord],
        marlin: (&DetectionResult, &PriceList),
        website: (&DetectionResult, &PriceList),
    ) -> Self {
        let views = vec![
            filter_view(FULL_DATA_SHEET, merged, |_| true),
            filter_view(MATCHED_SHEET, merged, |r| r.match_status == MatchStatus::Match),
            filter_view(MISMATCHED_SHEET, merged, |r| r.match_status == MatchStatus::Mismatch),
            filter_view(ONLY_WEBSITE_SHEET, merged, |r| r.comparison == Comparison::OnlyInWebsite),
            filter_view(ONLY_MARLIN_SHEET, merged, |r| r.comparison == Comparison::OnlyInMarlin),
        ];

        let count_status = |s: MatchStatus| merged.iter().filter(|r| r.match_status == s).count();
        let count_label = |c: Comparison| merged.iter().filter(|r| r.comparison == c).count();

        let (meta_m, list_m) = marlin;
        let (meta_w, list_w) = website;
        let text = |s: &str| SummaryValue::Text(s.to_string());

        let mut summary = Summary::default();
        summary.push("Detected Marlin sheet", text(meta_m.sheet.as_str()));
        summary.push("Marlin code column", text(meta_m.code_column.as_str()));
        summary.push("Marlin price column", text(meta_m.price_column.as_str()));
        summary.push("Detected Website sheet", text(meta_w.sheet.as_str()));
        summary.push("Website code column", text(meta_w.code_column.as_str()));
        summary.push("Website price column", text(meta_w.price_column.as_str()));
        summary.push("Total Website rows", SummaryValue::Count(list_w.len()));
        summary.push("Total Marlin rows", SummaryValue::Count(list_m.len()));
        summary.push("Matches", SummaryValue::Count(count_status(MatchStatus::Match)));
        summary.push("Mismatches", SummaryValue::Count(count_status(MatchStatus::Mismatch)));
        summary.push("Only in Website", SummaryValue::Count(count_label(Comparison::OnlyInWebsite)));
        summary.push("Only in Marlin", SummaryValue::Count(count_label(Comparison::OnlyInMarlin)));

        Self { views, summary }
    }

    pub fn view(&self, name: &str) -> Option<&ReportView> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Sheet names in output order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.views
            .iter()
            .map(|v| v.name)
            .chain(std::iter::once(SUMMARY_SHEET))
            .collect()
    }

    /// Serialize all views and the summary into an xlsx buffer
    #[cfg(feature = "excel")]
    pub fn to_xlsx_bytes(&self) -> crate::Result<Vec<u8>> {
        use rust_xlsxwriter::{Format, Workbook};

        let err = |e: rust_xlsxwriter::XlsxError| crate::Error::Report(e.to_string());
        let header_format = Format::new().set_bold();
        let mut workbook = Workbook::new();

        for view in &self.views {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(view.name).map_err(err)?;

            for (col, header) in REPORT_COLUMNS.iter().enumerate() {
                worksheet
                    .write_string_with_format(0, col as u16, *header, &header_format)
                    .map_err(err)?;
            }

            for (i, record) in view.rows.iter().enumerate() {
                let row = i as u32 + 1;
                worksheet.write_string(row, 0, &record.code).map_err(err)?;
                let numbers = [record.website_price, record.marlin_price, record.difference];
                for (offset, value) in numbers.iter().enumerate() {
                    // absent values stay blank
                    if let Some(value) = value {
                        worksheet.write_number(row, 1 + offset as u16, *value).map_err(err)?;
                    }
                }
                worksheet.write_string(row, 4, record.match_status.label()).map_err(err)?;
                worksheet.write_string(row, 5, record.comparison.label()).map_err(err)?;
            }
        }

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SUMMARY_SHEET).map_err(err)?;
        for (col, header) in SUMMARY_COLUMNS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(err)?;
        }
        for (i, (metric, value)) in self.summary.entries.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, metric).map_err(err)?;
            match value {
                SummaryValue::Text(s) => worksheet.write_string(row, 1, s).map_err(err)?,
                SummaryValue::Count(n) => worksheet.write_number(row, 1, *n as f64).map_err(err)?,
            };
        }

        workbook.save_to_buffer().map_err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::PriceRecord;
    use crate::reconcile::{reconcile, DEFAULT_TOLERANCE};

    fn detection(sheet: &str) -> DetectionResult {
        DetectionResult {
            sheet: sheet.to_string(),
            code_column: "SKU".to_string(),
            price_column: "Price".to_string(),
            confidence: 2.5,
        }
    }

    fn list(rows: &[(&str, f64)]) -> PriceList {
        rows.iter()
            .map(|(code, price)| PriceRecord { code: code.to_string(), price: Some(*price) })
            .collect()
    }

    fn sample_report() -> Report {
        let marlin = list(&[("A1", 10.0), ("A2", 20.0), ("A4", 7.0)]);
        let website = list(&[("A1", 10.0), ("A3", 5.0), ("A4", 8.0)]);
        let merged = reconcile(&website, &marlin, DEFAULT_TOLERANCE);
        Report::build(
            &merged,
            (&detection("Marlin"), &marlin),
            (&detection("Web"), &website),
        )
    }

    #[test]
    fn test_report_views() {
        let report = sample_report();
        assert_eq!(
            report.sheet_names(),
            vec!["Full Data", "Matched", "Mismatched", "Only in Website", "Only in Marlin", "Summary"]
        );

        let codes = |name: &str| -> Vec<String> {
            report.view(name).unwrap().rows.iter().map(|r| r.code.clone()).collect()
        };
        assert_eq!(codes(FULL_DATA_SHEET), vec!["A1", "A2", "A3", "A4"]);
        assert_eq!(codes(MATCHED_SHEET), vec!["A1"]);
        assert_eq!(codes(MISMATCHED_SHEET), vec!["A4"]);
        assert_eq!(codes(ONLY_WEBSITE_SHEET), vec!["A3"]);
        assert_eq!(codes(ONLY_MARLIN_SHEET), vec!["A2"]);
    }

    #[test]
    fn test_report_summary() {
        let report = sample_report();
        let summary = &report.summary;

        assert_eq!(summary.entries.len(), 12);
        assert_eq!(summary.entries[0].0, "Detected Marlin sheet");
        assert_eq!(summary.get("Detected Website sheet"), Some(&SummaryValue::Text("Web".into())));
        assert_eq!(summary.count("Total Website rows"), Some(3));
        assert_eq!(summary.count("Total Marlin rows"), Some(3));
        assert_eq!(summary.count("Matches"), Some(1));
        assert_eq!(summary.count("Mismatches"), Some(1));
        assert_eq!(summary.count("Only in Website"), Some(1));
        assert_eq!(summary.count("Only in Marlin"), Some(1));
    }

    #[cfg(feature = "excel")]
    #[test]
    fn test_report_to_xlsx_bytes() {
        let bytes = sample_report().to_xlsx_bytes().unwrap();
        // xlsx is a zip archive
        assert!(bytes.starts_with(b"PK"));
    }
}
