use crate::error::{PriceCompareError, Result};
use price_compare_common::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tolerance: f64,
    pub report_file_name: String,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            report_file_name: "Price_Comparison_Report.xlsx".into(),
            preview_rows: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            validate_tolerance(config.tolerance)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PriceCompareError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("price-compare").join("config.json"))
    }

    /// Tolerance for one run: the CLI value if given, else the configured one
    pub fn effective_tolerance(&self, override_value: Option<f64>) -> Result<f64> {
        let tolerance = override_value.unwrap_or(self.tolerance);
        validate_tolerance(tolerance)?;
        Ok(tolerance)
    }

    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<()> {
        validate_tolerance(tolerance)?;
        self.tolerance = tolerance;
        self.save()
    }

    pub fn set_report_file_name(&mut self, name: String) -> Result<()> {
        if name.trim().is_empty() {
            return Err(PriceCompareError::Config("Report file name must not be empty".into()));
        }
        self.report_file_name = name;
        self.save()
    }
}

pub fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(PriceCompareError::Config(format!(
            "Tolerance must be a non-negative number, got {}",
            tolerance
        )))
    }
}
