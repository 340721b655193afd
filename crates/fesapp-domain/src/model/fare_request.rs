//! Fare request type definitions

use fesapp_types::{DayType, TrafficLevel, TrafficPeriod, WeatherCondition};
use serde::{Deserialize, Serialize};

/// Inputs for a single fare calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRequest {
    /// Vehicle profile key
    pub vehicle_type: String,
    /// Trip distance in km
    pub distance_km: f64,
    /// Current fuel price (SLL)
    pub fuel_price: f64,
    #[serde(default)]
    pub traffic_level: TrafficLevel,
    #[serde(default)]
    pub weather_condition: WeatherCondition,
    #[serde(default)]
    pub traffic_period: TrafficPeriod,
    #[serde(default)]
    pub day_type: DayType,
}

impl FareRequest {
    /// Request with default conditions (moderate traffic, clear, off-peak, weekday)
    pub fn new(vehicle_type: impl Into<String>, distance_km: f64, fuel_price: f64) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            distance_km,
            fuel_price,
            traffic_level: TrafficLevel::default(),
            weather_condition: WeatherCondition::default(),
            traffic_period: TrafficPeriod::default(),
            day_type: DayType::default(),
        }
    }

    pub fn with_traffic_level(mut self, level: TrafficLevel) -> Self {
        self.traffic_level = level;
        self
    }

    pub fn with_weather(mut self, weather: WeatherCondition) -> Self {
        self.weather_condition = weather;
        self
    }

    pub fn with_period(mut self, period: TrafficPeriod) -> Self {
        self.traffic_period = period;
        self
    }

    pub fn with_day_type(mut self, day_type: DayType) -> Self {
        self.day_type = day_type;
        self
    }

    pub fn with_fuel_price(mut self, fuel_price: f64) -> Self {
        self.fuel_price = fuel_price;
        self
    }
}
