//! Domain model types

pub mod fare_breakdown;
pub mod fare_request;
pub mod geo_point;
pub mod tariff;
pub mod vehicle_profile;

pub use fare_breakdown::FareBreakdown;
pub use fare_request::FareRequest;
pub use geo_point::GeoPoint;
pub use tariff::{PeriodSurcharges, Tariff, WeatherSurcharges};
pub use vehicle_profile::VehicleProfile;
