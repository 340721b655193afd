//! Use cases driving the fare calculator

pub mod comparison_service;
pub mod quote_service;
pub mod trend_service;

pub use comparison_service::{
    compare_scenarios, load_rows_from_csv, ScenarioResult, ScenarioRow, MAX_COMPARISON_ROWS,
};
pub use quote_service::{quote_fare, resolve_distance_km, Quote, QuoteInput, TripConditions};
pub use trend_service::{day_type_for, simulate_trend, TrendOptions, TrendPoint, MAX_TREND_DAYS};
