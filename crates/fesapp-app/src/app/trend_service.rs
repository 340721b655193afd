//! Fare trend simulation over consecutive days
//!
//! Each simulated day shifts the fuel price by a fixed step and takes its day
//! type from the calendar (Saturday and Sunday are weekend days).

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fesapp_domain::{FareCalculator, FareRequest};
use fesapp_types::{DayType, Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TREND_FUEL_STEP;
use crate::ProgressCallback;

/// Longest simulation offered by the trend view
pub const MAX_TREND_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendOptions {
    pub start_date: NaiveDate,
    pub days: u32,
    /// Fuel price change per day (SLL)
    pub fuel_step: f64,
}

impl TrendOptions {
    /// One week from `start_date` with the default fuel step
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            days: 7,
            fuel_step: DEFAULT_TREND_FUEL_STEP,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_fuel_step(mut self, fuel_step: f64) -> Self {
        self.fuel_step = fuel_step;
        self
    }
}

/// One simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub fuel_price: f64,
    pub fare: f64,
}

pub fn day_type_for(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Price `base` once per day
///
/// The day type and fuel price of `base` are replaced per day; everything else
/// (vehicle, distance, traffic, weather, period) is held fixed.
pub fn simulate_trend(
    calculator: &FareCalculator,
    base: &FareRequest,
    options: &TrendOptions,
    progress: Option<&ProgressCallback>,
) -> Result<Vec<TrendPoint>> {
    if options.days == 0 || options.days > MAX_TREND_DAYS {
        return Err(Error::InvalidInput(format!(
            "trend days must be between 1 and {}, got {}",
            MAX_TREND_DAYS, options.days
        )));
    }
    if !options.fuel_step.is_finite() {
        return Err(Error::InvalidInput(format!(
            "fuel step must be a number, got {}",
            options.fuel_step
        )));
    }

    let mut points = Vec::with_capacity(options.days as usize);
    for i in 0..options.days {
        let date = options
            .start_date
            .checked_add_days(Days::new(u64::from(i)))
            .ok_or_else(|| Error::InvalidInput(format!("date out of range after {}", options.start_date)))?;
        let fuel_price = base.fuel_price + f64::from(i) * options.fuel_step;
        let day_type = day_type_for(date);

        let request = base
            .clone()
            .with_fuel_price(fuel_price)
            .with_day_type(day_type);
        let fare = calculator.quote(&request)?.total;

        if let Some(cb) = progress {
            cb(&format!("{} ({}): fuel {} -> {} SLL", date, day_type, fuel_price, fare));
        }
        points.push(TrendPoint {
            date,
            day_type,
            fuel_price,
            fare,
        });
    }

    Ok(points)
}
