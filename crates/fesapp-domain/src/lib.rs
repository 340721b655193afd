//! Domain models and services for public-transport fare estimation

pub mod model;
pub mod service;

pub use model::{FareBreakdown, FareRequest, GeoPoint, Tariff, VehicleProfile};
pub use service::{FareCalculator, round_half_even};
