//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fesapp_domain::GeoPoint;
use fesapp_types::{DayType, OutputFormat, TrafficLevel, TrafficPeriod, ValidationMode, WeatherCondition};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fesapp")]
#[command(version)]
#[command(about = "Freetown public transport fare estimator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// TOML tariff file replacing the standard fare tables
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,

    /// Input validation (strict, compatible). Uses config value if not specified.
    #[arg(long, global = true)]
    pub validation: Option<ValidationMode>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Trip conditions; defaults match the fare form's initial selections
#[derive(Args, Clone, Debug)]
pub struct ConditionArgs {
    /// Traffic level
    #[arg(long, value_enum, default_value = "low")]
    pub traffic: TrafficLevel,

    /// Weather condition
    #[arg(long, value_enum, default_value = "clear")]
    pub weather: WeatherCondition,

    /// Traffic period
    #[arg(long, value_enum, default_value = "morning-peak")]
    pub period: TrafficPeriod,

    /// Day type
    #[arg(long, value_enum, default_value = "weekday")]
    pub day: DayType,
}

/// Trip distance: typed in, or measured between two points
#[derive(Args, Clone, Debug)]
pub struct DistanceArgs {
    /// Distance in km
    #[arg(long, short = 'd', allow_hyphen_values = true, conflicts_with_all = ["from", "to"])]
    pub distance: Option<f64>,

    /// Start point as "lat,lon"
    #[arg(long, requires = "to", allow_hyphen_values = true)]
    pub from: Option<GeoPoint>,

    /// End point as "lat,lon"
    #[arg(long, requires = "from", allow_hyphen_values = true)]
    pub to: Option<GeoPoint>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the fare of one trip
    Quote {
        /// Vehicle type (e.g., "minibus", "keke", "formal bus"). Uses config value if not specified.
        #[arg(long = "vehicle")]
        vehicle: Option<String>,

        #[command(flatten)]
        distance: DistanceArgs,

        /// Current fuel price (SLL). Uses config value if not specified.
        #[arg(long, allow_hyphen_values = true)]
        fuel_price: Option<f64>,

        #[command(flatten)]
        conditions: ConditionArgs,
    },

    /// Simulate the fare over consecutive days
    Trend {
        /// Vehicle type. Uses config value if not specified.
        #[arg(long = "vehicle")]
        vehicle: Option<String>,

        #[command(flatten)]
        distance: DistanceArgs,

        /// Fuel price on the first day (SLL). Uses config value if not specified.
        #[arg(long, allow_hyphen_values = true)]
        fuel_price: Option<f64>,

        #[command(flatten)]
        conditions: ConditionArgs,

        /// First simulated day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of days to simulate (1-30)
        #[arg(long, short = 'n', default_value = "7")]
        days: u32,

        /// Daily fuel price change (SLL). Uses config value if not specified.
        #[arg(long, allow_hyphen_values = true)]
        fuel_step: Option<f64>,

        /// Export to a .csv or .xlsx file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Compare fares across routes or vehicle types
    Compare {
        /// Scenario as "vehicle:distance[:fuel_price]" (repeat up to 5 times)
        #[arg(long = "row", short = 'r')]
        rows: Vec<String>,

        /// CSV file with vehicle,distance_km[,fuel_price] rows
        #[arg(long, conflicts_with = "rows")]
        rows_csv: Option<PathBuf>,

        #[command(flatten)]
        conditions: ConditionArgs,

        /// Export to a .csv or .xlsx file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Measure the distance between two points
    Distance {
        /// Start point as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// List vehicle types of the active tariff
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default vehicle type
        #[arg(long)]
        set_vehicle: Option<String>,

        /// Set default fuel price (SLL)
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set tariff file used instead of the standard tables
        #[arg(long)]
        set_tariff: Option<PathBuf>,

        /// Go back to the standard tariff
        #[arg(long, conflicts_with = "set_tariff")]
        clear_tariff: bool,

        /// Set input validation mode
        #[arg(long)]
        set_validation: Option<ValidationMode>,

        /// Set daily fuel price change for trends (SLL)
        #[arg(long, allow_hyphen_values = true)]
        set_fuel_step: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quote_defaults() {
        let cli = Cli::parse_from(["fesapp", "quote", "--vehicle", "minibus", "-d", "10"]);
        match cli.command {
            Commands::Quote { vehicle, distance, fuel_price, conditions } => {
                assert_eq!(vehicle.as_deref(), Some("minibus"));
                assert_eq!(distance.distance, Some(10.0));
                assert!(fuel_price.is_none());
                assert_eq!(conditions.traffic, TrafficLevel::Low);
                assert_eq!(conditions.period, TrafficPeriod::MorningPeak);
                assert_eq!(conditions.day, DayType::Weekday);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_period_accepts_form_label() {
        let cli = Cli::parse_from(["fesapp", "quote", "-d", "1", "--period", "evening peak"]);
        match cli.command {
            Commands::Quote { conditions, .. } => assert_eq!(conditions.period, TrafficPeriod::EveningPeak),
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_points_parse() {
        let cli = Cli::parse_from(["fesapp", "distance", "--from", "8.48,-13.23", "--to", "8.43,-13.15"]);
        match cli.command {
            Commands::Distance { from, to } => {
                assert_eq!(from, GeoPoint::FREETOWN);
                assert_eq!(to.lat, 8.43);
            }
            _ => panic!("expected distance"),
        }
    }

    #[test]
    fn test_negative_fuel_price_accepted_by_quote_and_trend() {
        let quote = Cli::parse_from(["fesapp", "quote", "-d", "1", "--fuel-price", "-500"]);
        let trend = Cli::parse_from(["fesapp", "trend", "-d", "1", "--fuel-price", "-500"]);
        match (quote.command, trend.command) {
            (Commands::Quote { fuel_price: q, .. }, Commands::Trend { fuel_price: t, .. }) => {
                assert_eq!(q, Some(-500.0));
                assert_eq!(t, Some(-500.0));
            }
            _ => panic!("expected quote and trend"),
        }
    }

    #[test]
    fn test_from_requires_to() {
        assert!(Cli::try_parse_from(["fesapp", "quote", "--from", "8.48,-13.23"]).is_err());
    }

    #[test]
    fn test_unknown_weather_rejected_at_the_form() {
        assert!(Cli::try_parse_from(["fesapp", "quote", "-d", "1", "--weather", "foggy"]).is_err());
    }
}
