//! Writing reports and templates to disk, and JSON output

use crate::error::Result;
use price_compare_common::pipeline::{MARLIN, WEBSITE};
use price_compare_common::{
    template_bytes, template_file_name, ComparisonOutcome, DetectionResult, PriceRecord, Report,
    SideDetection,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct DetectionJson<'a> {
    detection: &'a DetectionResult,
    rows: usize,
    preview: Vec<&'a PriceRecord>,
}

#[derive(Serialize)]
struct ComparisonJson<'a> {
    marlin: &'a DetectionResult,
    website: &'a DetectionResult,
    report: &'a Report,
}

/// Resolve the report path: directories (or extension-less paths) get `file_name` appended
pub fn report_output_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

/// Write finished report bytes, creating the parent directory if needed
pub fn write_report(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}

/// Write the Marlin and Website templates into `dir`
pub fn write_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let bytes = template_bytes()?;

    let mut written = Vec::new();
    for side in [MARLIN, WEBSITE] {
        let path = dir.join(template_file_name(side));
        std::fs::write(&path, &bytes)?;
        written.push(path);
    }
    Ok(written)
}

/// Detection metadata, row count and the first `preview_rows` cleaned rows
pub fn detection_json(side: &SideDetection, preview_rows: usize) -> Result<String> {
    let output = DetectionJson {
        detection: &side.result,
        rows: side.prices.len(),
        preview: side.prices.iter().take(preview_rows).collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Both detections plus every report view and the summary
pub fn comparison_json(outcome: &ComparisonOutcome) -> Result<String> {
    let output = ComparisonJson {
        marlin: &outcome.marlin.result,
        website: &outcome.website.result,
        report: &outcome.report,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
