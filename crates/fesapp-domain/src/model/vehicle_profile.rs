//! Vehicle fare profile type definitions

use fesapp_types::TrafficLevel;
use serde::{Deserialize, Serialize};

/// Fare constants for one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Lookup key (e.g., "minibus", "paratransit bus")
    pub name: String,
    /// Fixed amount charged regardless of distance
    pub base_fare: f64,
    /// Marginal cost per km before the logarithmic distance adjustment
    pub per_km_rate: f64,
    /// How strongly fuel-price deviation moves the fare
    pub fuel_sensitivity: f64,
    /// Surcharges for [low, moderate, heavy] traffic
    pub traffic_surcharge_by_level: [f64; 3],
}

impl VehicleProfile {
    pub fn traffic_surcharge(&self, level: TrafficLevel) -> f64 {
        self.traffic_surcharge_by_level[level.index()]
    }
}
