//! CSV export

use std::path::Path;

use fesapp_types::Result;
use serde::Serialize;

use crate::app::{ScenarioResult, TrendPoint};

pub fn write_trend_csv(points: &[TrendPoint], path: &Path) -> Result<()> {
    write_records(points, path)
}

pub fn write_comparison_csv(results: &[ScenarioResult], path: &Path) -> Result<()> {
    write_records(results, path)
}

fn write_records<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
