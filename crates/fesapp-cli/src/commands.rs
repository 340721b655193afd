//! Command handlers

use crate::cli::{Cli, Commands, ConditionArgs, DistanceArgs};
use crate::output::{output_comparison, output_distance, output_quote, output_trend, output_vehicles};
use chrono::{Local, NaiveDate};
use fesapp_app::app::{
    compare_scenarios, load_rows_from_csv, quote_fare, resolve_distance_km, simulate_trend, QuoteInput, ScenarioRow,
    TripConditions, TrendOptions,
};
use fesapp_app::config::{load_tariff, Config};
use fesapp_app::export::{export_comparison, export_trend};
use fesapp_app::ProgressCallback;
use fesapp_domain::service::{geodesic_km, DistanceSource};
use fesapp_domain::FareCalculator;
use fesapp_types::{Error, OutputFormat, Result, ValidationMode};
use std::path::{Path, PathBuf};

pub fn execute(cli: Cli) -> Result<()> {
    // Reset before loading, so a config file that no longer parses can be replaced
    if let Commands::Config { reset: true, .. } = cli.command {
        return cmd_config_reset(&Config::config_path()?);
    }

    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.tariff.is_some() {
        config.tariff_path = cli.tariff.clone();
    }
    if let Some(validation) = cli.validation {
        config.validation = validation;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote {
            vehicle,
            distance,
            fuel_price,
            conditions,
        } => {
            let calculator = load_calculator(&cli, &config)?;
            let input = QuoteInput {
                vehicle_type: vehicle.clone().unwrap_or_else(|| config.default_vehicle.clone()),
                distance: distance_source(distance)?,
                fuel_price: fuel_price.unwrap_or(config.fuel_price),
                conditions: trip_conditions(conditions),
            };
            let progress = progress_callback(cli.verbose);
            let quote = quote_fare(&calculator, &input, progress.as_ref())?;
            output_quote(output_format, &quote)
        }

        Commands::Trend {
            vehicle,
            distance,
            fuel_price,
            conditions,
            start,
            days,
            fuel_step,
            output,
        } => {
            let calculator = load_calculator(&cli, &config)?;
            let vehicle = vehicle.clone().unwrap_or_else(|| config.default_vehicle.clone());
            let distance_km = resolve_distance_km(&distance_source(distance)?, calculator.validation())?;
            let base = trip_conditions(conditions).request(&vehicle, distance_km, fuel_price.unwrap_or(config.fuel_price));
            let options = TrendOptions::new(start.unwrap_or_else(today))
                .with_days(*days)
                .with_fuel_step(fuel_step.unwrap_or(config.trend_fuel_step));

            let progress = progress_callback(cli.verbose);
            let points = simulate_trend(&calculator, &base, &options, progress.as_ref())?;

            if let Some(path) = output {
                export_trend(&points, path)?;
                eprintln!("Exported {} days to {}", points.len(), path.display());
            }
            output_trend(output_format, &points)
        }

        Commands::Compare {
            rows,
            rows_csv,
            conditions,
            output,
        } => {
            let calculator = load_calculator(&cli, &config)?;
            let rows = scenario_rows(rows, rows_csv.as_deref())?;
            if cli.verbose {
                eprintln!("Comparing {} scenarios", rows.len());
            }
            let results = compare_scenarios(&calculator, &rows, &trip_conditions(conditions))?;

            if let Some(path) = output {
                export_comparison(&results, path)?;
                eprintln!("Exported {} scenarios to {}", results.len(), path.display());
            }
            output_comparison(output_format, &results)
        }

        Commands::Distance { from, to } => output_distance(output_format, from, to, geodesic_km(from, to)),

        Commands::Vehicles => {
            let calculator = load_calculator(&cli, &config)?;
            output_vehicles(output_format, calculator.tariff())
        }

        Commands::Config {
            show,
            set_vehicle,
            set_fuel_price,
            set_output,
            set_tariff,
            clear_tariff,
            set_validation,
            set_fuel_step,
            ..
        } => cmd_config(
            *show,
            set_vehicle.clone(),
            *set_fuel_price,
            *set_output,
            set_tariff.clone(),
            *clear_tariff,
            *set_validation,
            *set_fuel_step,
        ),
    }
}

fn load_calculator(cli: &Cli, config: &Config) -> Result<FareCalculator> {
    let calculator = config.calculator()?;
    if cli.verbose {
        match config.tariff_path {
            Some(ref path) => eprintln!("Tariff: {}", path.display()),
            None => eprintln!("Tariff: standard"),
        }
        eprintln!("Validation: {}", calculator.validation());
    }
    Ok(calculator)
}

fn progress_callback(verbose: bool) -> Option<ProgressCallback> {
    if verbose {
        Some(Box::new(|msg: &str| eprintln!("  {}", msg)) as ProgressCallback)
    } else {
        None
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn trip_conditions(args: &ConditionArgs) -> TripConditions {
    TripConditions {
        traffic_level: args.traffic,
        weather_condition: args.weather,
        traffic_period: args.period,
        day_type: args.day,
    }
}

fn distance_source(args: &DistanceArgs) -> Result<DistanceSource> {
    match (args.distance, args.from, args.to) {
        (Some(km), _, _) => Ok(DistanceSource::Manual(km)),
        (None, Some(from), Some(to)) => Ok(DistanceSource::Between(from, to)),
        _ => Err(Error::InvalidInput(
            "trip distance required: use --distance or --from/--to".to_string(),
        )),
    }
}

fn scenario_rows(rows: &[String], rows_csv: Option<&Path>) -> Result<Vec<ScenarioRow>> {
    if let Some(path) = rows_csv {
        return load_rows_from_csv(path);
    }
    rows.iter()
        .map(|r| r.parse::<ScenarioRow>().map_err(Error::InvalidInput))
        .collect()
}

fn cmd_config_reset(path: &Path) -> Result<()> {
    let config = Config::default();
    config.save_to(path)?;
    println!("Configuration reset to defaults");
    println!("\n{}", config);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_vehicle: Option<String>,
    set_fuel_price: Option<f64>,
    set_output: Option<OutputFormat>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
    set_validation: Option<ValidationMode>,
    set_fuel_step: Option<f64>,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_tariff {
        load_tariff(&path)?;
        config.tariff_path = Some(path);
        modified = true;
    }

    if clear_tariff {
        config.tariff_path = None;
        modified = true;
    }

    if let Some(vehicle) = set_vehicle {
        config.default_vehicle = vehicle;
        modified = true;
    }

    if let Some(fuel_price) = set_fuel_price {
        if !fuel_price.is_finite() || fuel_price < 0.0 {
            return Err(Error::InvalidInput(format!(
                "fuel price must be a non-negative number, got {}",
                fuel_price
            )));
        }
        config.fuel_price = fuel_price;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(validation) = set_validation {
        config.validation = validation;
        modified = true;
    }

    if let Some(step) = set_fuel_step {
        if !step.is_finite() {
            return Err(Error::InvalidInput(format!("fuel step must be a number, got {}", step)));
        }
        config.trend_fuel_step = step;
        modified = true;
    }

    if modified {
        let tariff = config.tariff()?;
        if tariff.profile(&config.default_vehicle).is_none() {
            return Err(Error::InvalidInput(format!(
                "default vehicle \"{}\" is not in the tariff (available: {})",
                config.default_vehicle,
                tariff.vehicle_types().collect::<Vec<_>>().join(", ")
            )));
        }
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
