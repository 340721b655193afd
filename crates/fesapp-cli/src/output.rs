//! Output formatting module

use fesapp_app::app::{Quote, ScenarioResult, TrendPoint};
use fesapp_domain::{GeoPoint, Tariff};
use fesapp_types::{OutputFormat, Result, CURRENCY};
use serde_json::json;

const BAR_WIDTH: usize = 30;

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    let request = &quote.request;
    let breakdown = &quote.breakdown;

    println!("\nEstimated Fare: {} {}", format_amount(quote.total()), CURRENCY);
    println!("======================");
    println!("Vehicle:         {}", request.vehicle_type);
    println!("Distance:        {:.2} km", request.distance_km);
    println!("Fuel price:      {} {}", format_amount(request.fuel_price), CURRENCY);
    println!("Traffic:         {}", request.traffic_level);
    println!("Weather:         {}", request.weather_condition);
    println!("Period:          {}", request.traffic_period);
    println!("Day:             {}", request.day_type);

    println!("\n--- Fare Breakdown ---");
    for (label, amount) in breakdown.amounts() {
        println!("{:<20} {:>12.2}", label, amount);
    }
    println!("{:<20} {:>12}", "Weekend Multiplier", format!("x{}", breakdown.weekend_multiplier));
    println!("----------------------");

    Ok(())
}

pub fn output_trend(output_format: OutputFormat, points: &[TrendPoint]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(points)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFare Trend Simulation");
    println!("=====================");
    println!("{:<12} {:<8} {:>10} {:>10}", "Date", "Day", "Fuel", "Fare");
    let max_fare = max_of(points.iter().map(|p| p.fare));
    for p in points {
        println!(
            "{:<12} {:<8} {:>10} {:>10}  {}",
            p.date.to_string(),
            p.day_type.to_string(),
            format_amount(p.fuel_price),
            format_amount(p.fare),
            bar(p.fare, max_fare)
        );
    }

    Ok(())
}

pub fn output_comparison(output_format: OutputFormat, results: &[ScenarioResult]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFare Comparison");
    println!("===============");
    println!(
        "{:<4} {:<16} {:>9} {:>10} {:>10}",
        "#", "Vehicle", "km", "Fuel", "Fare"
    );
    let max_fare = max_of(results.iter().map(|r| r.fare));
    for r in results {
        println!(
            "{:<4} {:<16} {:>9.2} {:>10} {:>10}  {}",
            r.scenario,
            r.vehicle,
            r.distance_km,
            format_amount(r.fuel_price),
            format_amount(r.fare),
            bar(r.fare, max_fare)
        );
    }

    if let Some(cheapest) = results.iter().min_by(|a, b| a.fare.total_cmp(&b.fare)) {
        println!(
            "\nCheapest: {} {} ({} {})",
            cheapest.scenario,
            cheapest.vehicle,
            format_amount(cheapest.fare),
            CURRENCY
        );
    }

    Ok(())
}

pub fn output_distance(output_format: OutputFormat, from: &GeoPoint, to: &GeoPoint, km: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&json!({
            "from": from,
            "to": to,
            "distance_km": km,
        }))?;
        println!("{}", content);
    } else {
        println!(
            "({:.4}, {:.4}) -> ({:.4}, {:.4}): {:.2} km",
            from.lat, from.lon, to.lat, to.lon, km
        );
    }
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, tariff: &Tariff) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&tariff.vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "{:<16} {:>8} {:>8} {:>6} {:>20}",
        "Vehicle", "Base", "Per km", "Fuel", "Traffic (L/M/H)"
    );
    for v in &tariff.vehicles {
        let [low, moderate, heavy] = v.traffic_surcharge_by_level;
        println!(
            "{:<16} {:>8} {:>8} {:>6} {:>20}",
            v.name,
            format_amount(v.base_fare),
            format_amount(v.per_km_rate),
            v.fuel_sensitivity,
            format!("{}/{}/{}", low, moderate, heavy)
        );
    }

    Ok(())
}

/// Whole-unit amount with thousands separators, e.g. 11100 -> "11,100"
pub fn format_amount(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}
