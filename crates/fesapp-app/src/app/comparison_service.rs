//! Side-by-side fare comparison of routes and vehicle types

use std::path::Path;
use std::str::FromStr;

use fesapp_domain::FareCalculator;
use fesapp_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::quote_service::TripConditions;
use crate::constants::REFERENCE_FUEL_PRICE;

/// Most rows the comparison view accepts
pub const MAX_COMPARISON_ROWS: usize = 5;

/// One route/vehicle to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub vehicle: String,
    pub distance_km: f64,
    #[serde(default = "default_fuel_price")]
    pub fuel_price: f64,
}

fn default_fuel_price() -> f64 {
    REFERENCE_FUEL_PRICE
}

impl FromStr for ScenarioRow {
    type Err = String;

    /// Parse "vehicle:distance[:fuel_price]", e.g. "formal bus:12.5:31000"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(|p| p.trim()).collect();
        let (vehicle, distance, fuel) = match parts.as_slice() {
            [vehicle, distance] => (*vehicle, *distance, None),
            [vehicle, distance, fuel] => (*vehicle, *distance, Some(*fuel)),
            _ => return Err(format!("expected \"vehicle:distance[:fuel_price]\", got \"{}\"", s)),
        };
        if vehicle.is_empty() {
            return Err(format!("missing vehicle in \"{}\"", s));
        }
        let distance_km = distance
            .parse()
            .map_err(|_| format!("invalid distance: {}", distance))?;
        let fuel_price = match fuel {
            Some(f) => f.parse().map_err(|_| format!("invalid fuel price: {}", f))?,
            None => default_fuel_price(),
        };
        Ok(Self {
            vehicle: vehicle.to_string(),
            distance_km,
            fuel_price,
        })
    }
}

/// Priced comparison row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// "#1", "#2", ...
    pub scenario: String,
    pub vehicle: String,
    pub distance_km: f64,
    pub fuel_price: f64,
    pub fare: f64,
}

/// Price every row under the same trip conditions
pub fn compare_scenarios(
    calculator: &FareCalculator,
    rows: &[ScenarioRow],
    conditions: &TripConditions,
) -> Result<Vec<ScenarioResult>> {
    if rows.is_empty() || rows.len() > MAX_COMPARISON_ROWS {
        return Err(Error::InvalidInput(format!(
            "comparison needs 1 to {} rows, got {}",
            MAX_COMPARISON_ROWS,
            rows.len()
        )));
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<ScenarioResult> {
            let request = conditions.request(&row.vehicle, row.distance_km, row.fuel_price);
            let fare = calculator.quote(&request)?.total;
            Ok(ScenarioResult {
                scenario: format!("#{}", i + 1),
                vehicle: row.vehicle.clone(),
                distance_km: row.distance_km,
                fuel_price: row.fuel_price,
                fare,
            })
        })
        .collect()
}

/// Load comparison rows from a CSV file
///
/// Columns: vehicle, distance_km, [fuel_price]. A header line is optional.
pub fn load_rows_from_csv(path: &Path) -> Result<Vec<ScenarioRow>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        if line == 0 && is_header(&fields) {
            continue;
        }
        let row = fields
            .join(":")
            .trim_end_matches(':')
            .parse::<ScenarioRow>()
            .map_err(|e| Error::InvalidInput(format!("{} line {}: {}", path.display(), line + 1, e)))?;
        rows.push(row);
    }
    Ok(rows)
}

fn is_header(fields: &[&str]) -> bool {
    fields.get(1).is_some_and(|f| f.parse::<f64>().is_err())
        && fields.iter().any(|f| {
            let f = f.to_lowercase();
            f.contains("vehicle") || f.contains("distance") || f.contains("fuel")
        })
}
