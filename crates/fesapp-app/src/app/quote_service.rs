//! Quote Service - a single "calculate fare" action
//!
//! 1. Resolve the trip distance (typed in, or measured between two points)
//! 2. Build the fare request from the trip conditions
//! 3. Price it

use fesapp_domain::service::{DistanceProvider, DistanceSource};
use fesapp_domain::{FareBreakdown, FareCalculator, FareRequest};
use fesapp_types::{DayType, Result, TrafficLevel, TrafficPeriod, ValidationMode, WeatherCondition};
use serde::{Deserialize, Serialize};

use crate::ProgressCallback;

/// Conditions shared by every fare in one session (trend days, comparison rows)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripConditions {
    pub traffic_level: TrafficLevel,
    pub weather_condition: WeatherCondition,
    pub traffic_period: TrafficPeriod,
    pub day_type: DayType,
}

impl TripConditions {
    pub fn request(&self, vehicle_type: &str, distance_km: f64, fuel_price: f64) -> FareRequest {
        FareRequest::new(vehicle_type, distance_km, fuel_price)
            .with_traffic_level(self.traffic_level)
            .with_weather(self.weather_condition)
            .with_period(self.traffic_period)
            .with_day_type(self.day_type)
    }
}

/// Form state for one quote
#[derive(Debug, Clone)]
pub struct QuoteInput {
    pub vehicle_type: String,
    pub distance: DistanceSource,
    pub fuel_price: f64,
    pub conditions: TripConditions,
}

/// A priced trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub request: FareRequest,
    pub breakdown: FareBreakdown,
}

impl Quote {
    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

/// Trip distance in km
///
/// Compatible mode takes a typed-in distance as given; strict mode rejects a
/// negative or non-finite one.
pub fn resolve_distance_km(source: &DistanceSource, validation: ValidationMode) -> Result<f64> {
    match (source, validation) {
        (DistanceSource::Manual(km), ValidationMode::Compatible) => Ok(*km),
        (source, _) => Ok(source.distance_km()?),
    }
}

/// Price one trip
pub fn quote_fare(
    calculator: &FareCalculator,
    input: &QuoteInput,
    progress: Option<&ProgressCallback>,
) -> Result<Quote> {
    let report = |msg: &str| {
        if let Some(cb) = progress {
            cb(msg);
        }
    };

    let distance_km = resolve_distance_km(&input.distance, calculator.validation())?;
    if let DistanceSource::Between(from, to) = input.distance {
        report(&format!(
            "Measured distance: {:.2} km ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            distance_km, from.lat, from.lon, to.lat, to.lon
        ));
    }

    let request = input
        .conditions
        .request(&input.vehicle_type, distance_km, input.fuel_price);
    report(&format!(
        "Pricing {} for {:.2} km at fuel price {} ({}, {}, {}, {})",
        request.vehicle_type,
        request.distance_km,
        request.fuel_price,
        request.traffic_level,
        request.weather_condition,
        request.traffic_period,
        request.day_type
    ));

    let breakdown = calculator.quote(&request)?;
    Ok(Quote { request, breakdown })
}
