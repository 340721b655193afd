//! Itemized fare result

use serde::{Deserialize, Serialize};

pub const BASE_FARE: &str = "Base Fare";
pub const DISTANCE_FARE: &str = "Distance Fare";
pub const FUEL_ADJUSTMENT: &str = "Fuel Adjustment";
pub const TRAFFIC_SURCHARGE: &str = "Traffic Surcharge";
pub const WEATHER_SURCHARGE: &str = "Weather Surcharge";
pub const PERIOD_SURCHARGE: &str = "Period Surcharge";
pub const WEEKEND_MULTIPLIER: &str = "Weekend Multiplier";
pub const SUBTOTAL: &str = "Subtotal";
pub const TOTAL_FARE: &str = "Total Fare";

/// Fare components of one calculation
///
/// Amounts are rounded to 2 decimals, `weekend_multiplier` is the raw factor and
/// `total` is the headline fare rounded to the nearest 100. Field order is the
/// display order, and serializes as a map keyed by the display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    #[serde(rename = "Base Fare")]
    pub base_fare: f64,
    #[serde(rename = "Distance Fare")]
    pub distance_fare: f64,
    #[serde(rename = "Fuel Adjustment")]
    pub fuel_adjustment: f64,
    #[serde(rename = "Traffic Surcharge")]
    pub traffic_surcharge: f64,
    #[serde(rename = "Weather Surcharge")]
    pub weather_surcharge: f64,
    #[serde(rename = "Period Surcharge")]
    pub period_surcharge: f64,
    #[serde(rename = "Weekend Multiplier")]
    pub weekend_multiplier: f64,
    #[serde(rename = "Subtotal")]
    pub subtotal: f64,
    #[serde(rename = "Total Fare")]
    pub total: f64,
}

impl FareBreakdown {
    /// All components in display order
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            (BASE_FARE, self.base_fare),
            (DISTANCE_FARE, self.distance_fare),
            (FUEL_ADJUSTMENT, self.fuel_adjustment),
            (TRAFFIC_SURCHARGE, self.traffic_surcharge),
            (WEATHER_SURCHARGE, self.weather_surcharge),
            (PERIOD_SURCHARGE, self.period_surcharge),
            (WEEKEND_MULTIPLIER, self.weekend_multiplier),
            (SUBTOTAL, self.subtotal),
            (TOTAL_FARE, self.total),
        ]
    }

    /// Currency amounts only, for charts and the amount table
    pub fn amounts(&self) -> Vec<(&'static str, f64)> {
        self.components()
            .into_iter()
            .filter(|(label, _)| *label != WEEKEND_MULTIPLIER)
            .collect()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.components()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}
