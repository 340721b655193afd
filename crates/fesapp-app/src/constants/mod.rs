//! Constants for fare estimation

pub mod fare_tables;

pub use fare_tables::{
    get_vehicle_profile, standard_calculator, standard_tariff, REFERENCE_FUEL_PRICE,
    STANDARD_TARIFF, WEEKEND_MULTIPLIER,
};
