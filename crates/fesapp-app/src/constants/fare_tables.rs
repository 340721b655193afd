//! Standard Freetown fare tables (SLL)

use std::sync::LazyLock;

use fesapp_domain::model::{PeriodSurcharges, WeatherSurcharges};
use fesapp_domain::{FareCalculator, Tariff, VehicleProfile};

/// Fuel price (SLL per litre) at which the fuel adjustment is zero
pub const REFERENCE_FUEL_PRICE: f64 = 30000.0;

/// Weekend scaling of the whole subtotal
pub const WEEKEND_MULTIPLIER: f64 = 1.1;

fn profile(name: &str, base_fare: f64, per_km_rate: f64, fuel_sensitivity: f64, traffic: [f64; 3]) -> VehicleProfile {
    VehicleProfile {
        name: name.to_string(),
        base_fare,
        per_km_rate,
        fuel_sensitivity,
        traffic_surcharge_by_level: traffic,
    }
}

/// Standard tariff, in the order the fare form lists vehicles
pub static STANDARD_TARIFF: LazyLock<Tariff> = LazyLock::new(|| Tariff {
    reference_fuel_price: REFERENCE_FUEL_PRICE,
    weekend_multiplier: WEEKEND_MULTIPLIER,
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
    vehicles: vec![
        profile("minibus", 5000.0, 500.0, 3.6, [500.0, 1000.0, 1500.0]),
        profile("keke", 5000.0, 500.0, 1.3, [1000.0, 2000.0, 3000.0]),
        profile("taxi", 5000.0, 500.0, 2.4, [1000.0, 2000.0, 3000.0]),
        profile("motorbike", 10000.0, 1000.0, 0.6, [200.0, 500.0, 800.0]),
        profile("paratransit bus", 5000.0, 500.0, 7.8, [500.0, 800.0, 1100.0]),
        profile("formal bus", 5000.0, 500.0, 7.8, [500.0, 800.0, 1100.0]),
    ],
});

pub fn standard_tariff() -> &'static Tariff {
    &STANDARD_TARIFF
}

/// Calculator over the standard tariff with strict input validation
pub fn standard_calculator() -> FareCalculator {
    FareCalculator::new(STANDARD_TARIFF.clone())
}

/// Get a standard vehicle profile by key
pub fn get_vehicle_profile(vehicle_type: &str) -> Option<&'static VehicleProfile> {
    STANDARD_TARIFF.profile(vehicle_type)
}
