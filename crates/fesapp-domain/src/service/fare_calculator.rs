//! Fare calculation
//!
//! # Formula
//! ```text
//! rate      = per_km_rate * (1 + 0.05 * ln(1 + distance_km))
//! fuel_adj  = (fuel_price - reference_fuel_price) * fuel_sensitivity / 1000
//! subtotal  = base + distance_km * rate + fuel_adj + traffic + weather + period
//! total     = round_to_nearest_hundred(subtotal * weekend_multiplier)
//! ```
//!
//! Distance fare, subtotal and total round on the scaled product (`x * 100`,
//! `x / 100`); the fuel adjustment and table amounts round on their exact value.

use fesapp_types::{
    DayType, FareError, TrafficLevel, TrafficPeriod, ValidationMode, WeatherCondition,
};

use super::rounding::{round_half_even, round_scaled_half_even, round_to_nearest_hundred};
use crate::model::{FareBreakdown, FareRequest, Tariff};

/// Growth of the per-km rate with ln(1 + distance)
pub const DISTANCE_RATE_GROWTH: f64 = 0.05;

/// Divisor applied to the scaled fuel-price deviation
pub const FUEL_ADJUSTMENT_DIVISOR: f64 = 1000.0;

/// Breakdown amounts are shown to 2 decimals
const BREAKDOWN_DECIMALS: u32 = 2;

/// Conditions after label lookup. `None` means the label was not recognized.
#[derive(Debug, Clone, Copy, Default)]
struct Conditions {
    traffic_level: Option<TrafficLevel>,
    weather_condition: Option<WeatherCondition>,
    traffic_period: Option<TrafficPeriod>,
    day_type: Option<DayType>,
}

impl From<&FareRequest> for Conditions {
    fn from(request: &FareRequest) -> Self {
        Self {
            traffic_level: Some(request.traffic_level),
            weather_condition: Some(request.weather_condition),
            traffic_period: Some(request.traffic_period),
            day_type: Some(request.day_type),
        }
    }
}

/// Prices trips against one tariff
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FareCalculator {
    tariff: Tariff,
    validation: ValidationMode,
}

impl FareCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            tariff,
            validation: ValidationMode::default(),
        }
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Price a typed request
    pub fn quote(&self, request: &FareRequest) -> Result<FareBreakdown, FareError> {
        self.price(
            &request.vehicle_type,
            request.distance_km,
            request.fuel_price,
            Conditions::from(request),
        )
    }

    /// Price a trip described by form labels
    ///
    /// Unrecognized condition labels do not fail: traffic falls back to the
    /// moderate tier, weather and period to no surcharge, day type to weekday.
    /// Only an unknown vehicle type is an error.
    ///
    /// # Returns
    /// `(total, breakdown)` where `total == breakdown.total`
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        &self,
        vehicle_type: &str,
        distance_km: f64,
        fuel_price: f64,
        traffic_level: &str,
        weather_condition: &str,
        traffic_period: &str,
        day_type: &str,
    ) -> Result<(f64, FareBreakdown), FareError> {
        let conditions = Conditions {
            traffic_level: TrafficLevel::from_label(traffic_level),
            weather_condition: WeatherCondition::from_label(weather_condition),
            traffic_period: TrafficPeriod::from_label(traffic_period),
            day_type: DayType::from_label(day_type),
        };
        let breakdown = self.price(vehicle_type, distance_km, fuel_price, conditions)?;
        Ok((breakdown.total, breakdown))
    }

    fn price(
        &self,
        vehicle_type: &str,
        distance_km: f64,
        fuel_price: f64,
        conditions: Conditions,
    ) -> Result<FareBreakdown, FareError> {
        let profile = self
            .tariff
            .profile(vehicle_type)
            .ok_or_else(|| FareError::UnknownVehicleType(vehicle_type.to_string()))?;

        if self.validation == ValidationMode::Strict {
            check_non_negative("distance_km", distance_km)?;
            check_non_negative("fuel_price", fuel_price)?;
        }

        let rate = profile.per_km_rate * (1.0 + DISTANCE_RATE_GROWTH * distance_km.ln_1p());
        let distance_fare = distance_km * rate;
        let fuel_adjustment = (fuel_price - self.tariff.reference_fuel_price)
            * profile.fuel_sensitivity
            / FUEL_ADJUSTMENT_DIVISOR;
        let traffic_surcharge =
            profile.traffic_surcharge(conditions.traffic_level.unwrap_or(TrafficLevel::Moderate));
        let weather_surcharge = conditions
            .weather_condition
            .map_or(0.0, |w| self.tariff.weather_surcharge.get(w));
        let period_surcharge = conditions
            .traffic_period
            .map_or(0.0, |p| self.tariff.period_surcharge.get(p));
        let weekend_multiplier = match conditions.day_type {
            Some(DayType::Weekend) => self.tariff.weekend_multiplier,
            _ => 1.0,
        };

        let subtotal = profile.base_fare
            + distance_fare
            + fuel_adjustment
            + traffic_surcharge
            + weather_surcharge
            + period_surcharge;
        let total = round_to_nearest_hundred(subtotal * weekend_multiplier);

        // table amounts and the fuel adjustment round exactly; log-derived ones scaled
        let display = |amount: f64| round_half_even(amount, BREAKDOWN_DECIMALS);
        let display_scaled = |amount: f64| round_scaled_half_even(amount, BREAKDOWN_DECIMALS as i32);
        Ok(FareBreakdown {
            base_fare: display(profile.base_fare),
            distance_fare: display_scaled(distance_fare),
            fuel_adjustment: display(fuel_adjustment),
            traffic_surcharge: display(traffic_surcharge),
            weather_surcharge: display(weather_surcharge),
            period_surcharge: display(period_surcharge),
            weekend_multiplier,
            subtotal: display_scaled(subtotal),
            total,
        })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), FareError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FareError::InvalidParameter {
            name,
            value,
            reason: "must be a non-negative number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PeriodSurcharges, VehicleProfile, WeatherSurcharges};

    fn profile(name: &str, base: f64, per_km: f64, fuel: f64, traffic: [f64; 3]) -> VehicleProfile {
        VehicleProfile {
            name: name.to_string(),
            base_fare: base,
            per_km_rate: per_km,
            fuel_sensitivity: fuel,
            traffic_surcharge_by_level: traffic,
        }
    }

    fn freetown_tariff() -> Tariff {
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
            vehicles: vec![
                profile("minibus", 5000.0, 500.0, 3.6, [500.0, 1000.0, 1500.0]),
                profile("taxi", 5000.0, 500.0, 2.4, [1000.0, 2000.0, 3000.0]),
                profile("motorbike", 10000.0, 1000.0, 0.6, [200.0, 500.0, 800.0]),
            ],
        }
    }

    fn calculator() -> FareCalculator {
        FareCalculator::new(freetown_tariff())
    }

    // ==========================================
    // Reference scenarios
    // ==========================================

    #[test]
    fn test_minibus_ten_km_weekday() {
        let (total, b) = calculator()
            .compute("minibus", 10.0, 30000.0, "low", "clear", "off-peak", "weekday")
            .unwrap();
        assert_eq!(total, 11100.0);
        assert_eq!(b.total, 11100.0);
        assert_eq!(b.base_fare, 5000.0);
        assert!((b.distance_fare - 5599.47).abs() < 1e-9);
        assert_eq!(b.fuel_adjustment, 0.0);
        assert_eq!(b.traffic_surcharge, 500.0);
        assert_eq!(b.weekend_multiplier, 1.0);
        assert!((b.subtotal - 11099.47).abs() < 1e-9);
    }

    #[test]
    fn test_taxi_rainy_morning_peak() {
        // 5000 + 2723.97 + 4.8 + 3000 + 500 + 900 = 12128.77
        let (total, b) = calculator()
            .compute("taxi", 5.0, 32000.0, "heavy", "rainy", "morning peak", "weekday")
            .unwrap();
        assert_eq!(total, 12100.0);
        assert!((b.distance_fare - 2723.97).abs() < 1e-9);
        assert!((b.fuel_adjustment - 4.8).abs() < 1e-9);
        assert!((b.subtotal - 12128.77).abs() < 1e-9);
    }

    #[test]
    fn test_cheap_fuel_gives_negative_adjustment() {
        let b = calculator()
            .quote(&FareRequest::new("motorbike", 3.5, 28000.0))
            .unwrap();
        assert!((b.fuel_adjustment - (-1.2)).abs() < 1e-9);
        assert!((b.distance_fare - 3763.21).abs() < 1e-9);
        assert_eq!(b.total, 14300.0);
    }

    // ==========================================
    // Properties
    // ==========================================

    #[test]
    fn test_zero_distance_has_no_distance_fare() {
        let calc = calculator();
        for vehicle in calc.tariff().vehicle_types() {
            let (total, b) = calc
                .compute(vehicle, 0.0, 30000.0, "heavy", "cloudy", "evening peak", "weekday")
                .unwrap();
            assert_eq!(b.distance_fare, 0.0);
            let expected = round_to_nearest_hundred(
                b.base_fare + b.fuel_adjustment + b.traffic_surcharge + 100.0 + 1000.0,
            );
            assert_eq!(total, expected);
        }
    }

    #[test]
    fn test_total_never_decreases_with_distance() {
        let calc = calculator();
        let mut previous = 0.0;
        for step in 0..400 {
            let km = step as f64 * 0.25;
            let b = calc.quote(&FareRequest::new("minibus", km, 30000.0)).unwrap();
            assert!(b.total >= previous, "total dropped at {} km", km);
            previous = b.total;
        }
    }

    #[test]
    fn test_weekend_scales_subtotal() {
        let calc = calculator();
        let request = FareRequest::new("taxi", 7.3, 31500.0).with_traffic_level(TrafficLevel::Heavy);
        let weekday = calc.quote(&request).unwrap();
        let weekend = calc.quote(&request.clone().with_day_type(DayType::Weekend)).unwrap();

        assert_eq!(weekend.weekend_multiplier, 1.1);
        assert_eq!(weekday.subtotal, weekend.subtotal);

        let pre_rounded = 5000.0
            + 7.3 * (500.0 * (1.0 + 0.05 * 7.3f64.ln_1p()))
            + 1500.0 * 2.4 / 1000.0
            + 3000.0;
        assert_eq!(weekday.total, round_to_nearest_hundred(pre_rounded));
        assert_eq!(weekend.total, round_to_nearest_hundred(pre_rounded * 1.1));
    }

    #[test]
    fn test_reference_fuel_price_is_neutral() {
        let calc = calculator();
        for vehicle in calc.tariff().vehicle_types() {
            let b = calc.quote(&FareRequest::new(vehicle, 12.0, 30000.0)).unwrap();
            assert_eq!(b.fuel_adjustment, 0.0);
        }
    }

    #[test]
    fn test_idempotent() {
        let calc = calculator();
        let first = calc.compute("minibus", 8.8, 33333.0, "heavy", "stormy", "afternoon peak", "weekend");
        let second = calc.compute("minibus", 8.8, 33333.0, "heavy", "stormy", "afternoon peak", "weekend");
        let (t1, b1) = first.unwrap();
        let (t2, b2) = second.unwrap();
        assert_eq!(t1.to_bits(), t2.to_bits());
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_total_tie_rounds_to_even_hundred() {
        let mut tariff = freetown_tariff();
        tariff.vehicles.push(profile("tie", 12650.0, 500.0, 1.0, [0.0, 0.0, 0.0]));
        let calc = FareCalculator::new(tariff);
        let b = calc.quote(&FareRequest::new("tie", 0.0, 30000.0)).unwrap();
        assert_eq!(b.subtotal, 12650.0);
        assert_eq!(b.total, 12600.0);
    }

    #[test]
    fn test_subtotal_rounds_on_scaled_value() {
        let mut tariff = freetown_tariff();
        tariff.vehicles.push(profile("keke", 5000.0, 500.0, 1.3, [1000.0, 2000.0, 3000.0]));
        let calc = FareCalculator::new(tariff);
        let (total, b) = calc
            .compute("keke", 0.0, 25150.0, "low", "clear", "off-peak", "weekday")
            .unwrap();
        // fuel adjustment -6.305 is stored below the tie, subtotal 5993.695 * 100 is a tie
        assert_eq!(b.fuel_adjustment, -6.3);
        assert_eq!(b.subtotal, 5993.7);
        assert_eq!(total, 6000.0);
    }

    // ==========================================
    // Lenient condition labels
    // ==========================================

    #[test]
    fn test_unknown_labels_use_defaults() {
        let calc = calculator();
        let (lenient, b) = calc
            .compute("motorbike", 3.5, 28000.0, "gridlock", "foggy", "midnight", "holiday")
            .unwrap();
        assert_eq!(b.traffic_surcharge, 500.0);
        assert_eq!(b.weather_surcharge, 0.0);
        assert_eq!(b.period_surcharge, 0.0);
        assert_eq!(b.weekend_multiplier, 1.0);

        let (explicit, _) = calc
            .compute("motorbike", 3.5, 28000.0, "moderate", "clear", "off-peak", "weekday")
            .unwrap();
        assert_eq!(lenient, explicit);
    }

    #[test]
    fn test_unknown_weather_means_no_surcharge_even_if_clear_costs() {
        let mut tariff = freetown_tariff();
        tariff.weather_surcharge.clear = 250.0;
        let calc = FareCalculator::new(tariff);
        let (_, unknown) = calc
            .compute("taxi", 1.0, 30000.0, "low", "foggy", "off-peak", "weekday")
            .unwrap();
        let (_, clear) = calc
            .compute("taxi", 1.0, 30000.0, "low", "clear", "off-peak", "weekday")
            .unwrap();
        assert_eq!(unknown.weather_surcharge, 0.0);
        assert_eq!(clear.weather_surcharge, 250.0);
    }

    // ==========================================
    // Failures
    // ==========================================

    #[test]
    fn test_unknown_vehicle() {
        let err = calculator()
            .compute("jetpack", 10.0, 30000.0, "low", "clear", "off-peak", "weekday")
            .unwrap_err();
        assert_eq!(err, FareError::UnknownVehicleType("jetpack".to_string()));
    }

    #[test]
    fn test_unknown_vehicle_reported_before_bad_distance() {
        let err = calculator()
            .quote(&FareRequest::new("jetpack", -1.0, 30000.0))
            .unwrap_err();
        assert!(matches!(err, FareError::UnknownVehicleType(_)));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let calc = calculator();
        let err = calc.quote(&FareRequest::new("taxi", -2.0, 30000.0)).unwrap_err();
        assert!(matches!(err, FareError::InvalidParameter { name: "distance_km", .. }));

        let err = calc.quote(&FareRequest::new("taxi", 2.0, -5.0)).unwrap_err();
        assert!(matches!(err, FareError::InvalidParameter { name: "fuel_price", .. }));

        let err = calc.quote(&FareRequest::new("taxi", f64::NAN, 30000.0)).unwrap_err();
        assert!(matches!(err, FareError::InvalidParameter { .. }));
    }

    #[test]
    fn test_compatible_mode_prices_negative_fuel() {
        let calc = calculator().with_validation(ValidationMode::Compatible);
        let b = calc.quote(&FareRequest::new("taxi", 0.0, -10000.0)).unwrap();
        // (-10000 - 30000) * 2.4 / 1000
        assert!((b.fuel_adjustment - (-96.0)).abs() < 1e-9);
        assert_eq!(b.total, 6900.0);
    }

    #[test]
    fn test_shared_across_threads() {
        let calc = &calculator();
        let expected = calc.quote(&FareRequest::new("minibus", 10.0, 30000.0)).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || calc.quote(&FareRequest::new("minibus", 10.0, 30000.0))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
