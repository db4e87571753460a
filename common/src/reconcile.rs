//! Reconciliation of the Website and Marlin price lists
//!
//! Full outer join on code, then per-row difference, match status and
//! comparison label. Both classifications share one tolerance test.

use crate::price::PriceList;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Default price tolerance (cents)
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Price match status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchStatus {
    Match,
    Mismatch,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Match => "Match",
            MatchStatus::Mismatch => "Mismatch",
            MatchStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparison {
    #[serde(rename = "Only in Website")]
    OnlyInWebsite,
    #[serde(rename = "Only in Marlin")]
    OnlyInMarlin,
    #[serde(rename = "Missing in both")]
    MissingInBoth,
    #[serde(rename = "Equal (within tolerance)")]
    Equal,
    #[serde(rename = "Website higher")]
    WebsiteHigher,
    #[serde(rename = "Marlin higher")]
    MarlinHigher,
}

impl Comparison {
    pub fn label(&self) -> &'static str {
        match self {
            Comparison::OnlyInWebsite => "Only in Website",
            Comparison::OnlyInMarlin => "Only in Marlin",
            Comparison::MissingInBoth => "Missing in both",
            Comparison::Equal => "Equal (within tolerance)",
            Comparison::WebsiteHigher => "Website higher",
            Comparison::MarlinHigher => "Marlin higher",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the joined table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    pub code: String,
    pub website_price: Option<f64>,
    pub marlin_price: Option<f64>,
    /// website - marlin, when both are present
    pub difference: Option<f64>,
    pub match_status: MatchStatus,
    pub comparison: Comparison,
}

impl MergedRecord {
    /// Classify one joined row
    pub fn new(
        code: String,
        website_price: Option<f64>,
        marlin_price: Option<f64>,
        tolerance: f64,
    ) -> Self {
        let difference = match (website_price, marlin_price) {
            (Some(w), Some(m)) => Some(w - m),
            _ => None,
        };
        let within = difference.map(|d| d.abs() <= tolerance);

        let match_status = match within {
            None => MatchStatus::NotApplicable,
            Some(true) => MatchStatus::Match,
            Some(false) => MatchStatus::Mismatch,
        };

        let comparison = match (website_price, marlin_price, difference) {
            (None, Some(_), _) => Comparison::OnlyInMarlin,
            (Some(_), None, _) => Comparison::OnlyInWebsite,
            (None, None, _) => Comparison::MissingInBoth,
            _ if within == Some(true) => Comparison::Equal,
            (_, _, Some(d)) if d > 0.0 => Comparison::WebsiteHigher,
            _ => Comparison::MarlinHigher,
        };

        Self {
            code,
            website_price,
            marlin_price,
            difference,
            match_status,
            comparison,
        }
    }
}

/// Full outer join of the two lists, ordered by code.
///
/// A code listed on one side with an unparseable price counts as absent
/// on that side, so it is labelled as if the code were missing there.
pub fn reconcile(website: &PriceList, marlin: &PriceList, tolerance: f64) -> Vec<MergedRecord> {
    let mut joined: BTreeMap<&str, (Option<f64>, Option<f64>)> = BTreeMap::new();

    for record in website.iter() {
        joined.entry(record.code.as_str()).or_default().0 = record.price;
    }
    for record in marlin.iter() {
        joined.entry(record.code.as_str()).or_default().1 = record.price;
    }

    let merged: Vec<MergedRecord> = joined
        .into_iter()
        .map(|(code, (w, m))| MergedRecord::new(code.to_string(), w, m, tolerance))
        .collect();

    tracing::info!(
        rows = merged.len(),
        website = website.len(),
        marlin = marlin.len(),
        "reconciled price lists"
    );
    merged
}
