//! Domain services

pub mod distance;
pub mod fare_calculator;
pub mod rounding;

pub use distance::{geodesic_km, haversine_km, DistanceProvider, DistanceSource};
pub use fare_calculator::FareCalculator;
pub use rounding::{round_half_even, round_scaled_half_even, round_to_nearest_hundred};
