//! Tariff: the read-only fare tables a calculator prices against

use fesapp_types::{ConfigError, TrafficPeriod, WeatherCondition};
use serde::{Deserialize, Serialize};

use super::VehicleProfile;

/// Weather surcharge table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSurcharges {
    pub clear: f64,
    pub cloudy: f64,
    pub rainy: f64,
    pub stormy: f64,
}

impl WeatherSurcharges {
    pub fn get(&self, weather: WeatherCondition) -> f64 {
        match weather {
            WeatherCondition::Clear => self.clear,
            WeatherCondition::Cloudy => self.cloudy,
            WeatherCondition::Rainy => self.rainy,
            WeatherCondition::Stormy => self.stormy,
        }
    }
}

/// Traffic period surcharge table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSurcharges {
    pub morning_peak: f64,
    pub afternoon_peak: f64,
    pub evening_peak: f64,
    pub off_peak: f64,
}

impl PeriodSurcharges {
    pub fn get(&self, period: TrafficPeriod) -> f64 {
        match period {
            TrafficPeriod::MorningPeak => self.morning_peak,
            TrafficPeriod::AfternoonPeak => self.afternoon_peak,
            TrafficPeriod::EveningPeak => self.evening_peak,
            TrafficPeriod::OffPeak => self.off_peak,
        }
    }
}

/// Complete set of fare tables
///
/// Built once (the standard tariff, or one loaded from a TOML file) and then
/// only read. Vehicles keep their declaration order for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Fuel price at which the fuel adjustment is zero
    pub reference_fuel_price: f64,
    /// Scaling applied to the whole subtotal on weekends
    pub weekend_multiplier: f64,
    pub weather_surcharge: WeatherSurcharges,
    pub period_surcharge: PeriodSurcharges,
    pub vehicles: Vec<VehicleProfile>,
}

impl Tariff {
    /// Find a vehicle profile by its exact key
    pub fn profile(&self, vehicle_type: &str) -> Option<&VehicleProfile> {
        self.vehicles.iter().find(|p| p.name == vehicle_type)
    }

    pub fn vehicle_types(&self) -> impl Iterator<Item = &str> {
        self.vehicles.iter().map(|p| p.name.as_str())
    }

    /// Check the invariants a hand-written tariff file might break
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::InvalidTariff(msg));

        if !is_amount(self.reference_fuel_price) {
            return invalid(format!(
                "reference_fuel_price must be a non-negative number, got {}",
                self.reference_fuel_price
            ));
        }
        if !(self.weekend_multiplier.is_finite() && self.weekend_multiplier > 0.0) {
            return invalid(format!(
                "weekend_multiplier must be positive, got {}",
                self.weekend_multiplier
            ));
        }
        for weather in WeatherCondition::ALL {
            if !is_amount(self.weather_surcharge.get(weather)) {
                return invalid(format!("weather surcharge for {} is negative", weather));
            }
        }
        for period in TrafficPeriod::ALL {
            if !is_amount(self.period_surcharge.get(period)) {
                return invalid(format!("period surcharge for {} is negative", period));
            }
        }
        if self.vehicles.is_empty() {
            return invalid("no vehicle profiles defined".to_string());
        }

        for (i, profile) in self.vehicles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return invalid(format!("vehicle #{} has an empty name", i + 1));
            }
            if self.vehicles[..i].iter().any(|p| p.name == profile.name) {
                return invalid(format!("duplicate vehicle type: {}", profile.name));
            }
            let amounts = [profile.base_fare, profile.per_km_rate, profile.fuel_sensitivity]
                .into_iter()
                .chain(profile.traffic_surcharge_by_level);
            for amount in amounts {
                if !is_amount(amount) {
                    return invalid(format!(
                        "vehicle {} has a negative or non-finite amount: {}",
                        profile.name, amount
                    ));
                }
            }
        }

        Ok(())
    }
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tariff() -> Tariff {
        Tariff {
            reference_fuel_price: 30000.0,
            weekend_multiplier: 1.1,
            weather_surcharge: WeatherSurcharges {
                clear: 0.0,
                cloudy: 100.0,
                rainy: 500.0,
                stormy: 1000.0,
            },
            period_surcharge: PeriodSurcharges {
                morning_peak: 900.0,
                afternoon_peak: 800.0,
                evening_peak: 1000.0,
                off_peak: 0.0,
            },
            vehicles: vec![VehicleProfile {
                name: "keke".to_string(),
                base_fare: 5000.0,
                per_km_rate: 500.0,
                fuel_sensitivity: 1.3,
                traffic_surcharge_by_level: [1000.0, 2000.0, 3000.0],
            }],
        }
    }

    #[test]
    fn test_profile_lookup() {
        let tariff = sample_tariff();
        assert!(tariff.profile("keke").is_some());
        assert!(tariff.profile("Keke").is_none());
        assert!(tariff.profile("jetpack").is_none());
    }

    #[test]
    fn test_surcharge_tables() {
        let tariff = sample_tariff();
        assert_eq!(tariff.weather_surcharge.get(WeatherCondition::Rainy), 500.0);
        assert_eq!(tariff.period_surcharge.get(TrafficPeriod::EveningPeak), 1000.0);
    }

    #[test]
    fn test_valid_tariff() {
        assert!(sample_tariff().validate().is_ok());
    }

    #[test]
    fn test_rejects_duplicate_vehicle() {
        let mut tariff = sample_tariff();
        tariff.vehicles.push(tariff.vehicles[0].clone());
        let err = tariff.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate vehicle type: keke"));
    }

    #[test]
    fn test_rejects_negative_surcharge() {
        let mut tariff = sample_tariff();
        tariff.vehicles[0].traffic_surcharge_by_level[2] = -1.0;
        assert!(tariff.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_weekend_multiplier() {
        let mut tariff = sample_tariff();
        tariff.weekend_multiplier = 0.0;
        assert!(tariff.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_vehicle_list() {
        let mut tariff = sample_tariff();
        tariff.vehicles.clear();
        assert!(tariff.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_vehicle_order() {
        let mut tariff = sample_tariff();
        tariff.vehicles.insert(
            0,
            VehicleProfile {
                name: "minibus".to_string(),
                base_fare: 5000.0,
                per_km_rate: 500.0,
                fuel_sensitivity: 3.6,
                traffic_surcharge_by_level: [500.0, 1000.0, 1500.0],
            },
        );
        let text = toml::to_string(&tariff).unwrap();
        let parsed: Tariff = toml::from_str(&text).unwrap();
        assert_eq!(parsed, tariff);
        assert_eq!(parsed.vehicle_types().collect::<Vec<_>>(), vec!["minibus", "keke"]);
    }
}
