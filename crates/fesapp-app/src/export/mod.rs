//! Export of trend and comparison results to CSV or Excel

pub mod csv;
pub mod excel;

use std::path::Path;

use fesapp_types::{Error, Result};

use crate::app::{ScenarioResult, TrendPoint};

/// File format picked from the output path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("xlsx") => Ok(ExportFormat::Excel),
            _ => Err(Error::InvalidInput(format!(
                "unsupported export file {} (use .csv or .xlsx)",
                path.display()
            ))),
        }
    }
}

pub fn export_trend(points: &[TrendPoint], path: &Path) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Csv => csv::write_trend_csv(points, path),
        ExportFormat::Excel => excel::export_trend_to_excel(points, path),
    }
}

pub fn export_comparison(results: &[ScenarioResult], path: &Path) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Csv => csv::write_comparison_csv(results, path),
        ExportFormat::Excel => excel::export_comparison_to_excel(results, path),
    }
}
