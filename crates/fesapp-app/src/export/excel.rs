//! Excel export functionality

use std::path::Path;

use fesapp_types::{Error, Result, CURRENCY};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::app::{ScenarioResult, TrendPoint};

enum Cell {
    Text(String),
    Amount(f64),
    Number(f64),
}

/// Export a trend simulation: one row per day plus a summary sheet
pub fn export_trend_to_excel(points: &[TrendPoint], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let fares: Vec<f64> = points.iter().map(|p| p.fare).collect();
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, "Fare Trend Simulation", &fares)?;

    let headers = [
        "Date".to_string(),
        "Day Type".to_string(),
        format!("Fuel Price ({})", CURRENCY),
        format!("Estimated Fare ({})", CURRENCY),
    ];
    let rows: Vec<Vec<Cell>> = points
        .iter()
        .map(|p| {
            vec![
                Cell::Text(p.date.to_string()),
                Cell::Text(p.day_type.to_string()),
                Cell::Amount(p.fuel_price),
                Cell::Amount(p.fare),
            ]
        })
        .collect();
    let details_sheet = workbook.add_worksheet();
    write_table_sheet(details_sheet, "Trend", &headers, &rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export a scenario comparison: one row per scenario plus a summary sheet
pub fn export_comparison_to_excel(results: &[ScenarioResult], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let fares: Vec<f64> = results.iter().map(|r| r.fare).collect();
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, "Route / Vehicle Fare Comparison", &fares)?;

    let headers = [
        "Scenario".to_string(),
        "Vehicle".to_string(),
        "Distance (km)".to_string(),
        format!("Fuel Price ({})", CURRENCY),
        format!("Estimated Fare ({})", CURRENCY),
    ];
    let rows: Vec<Vec<Cell>> = results
        .iter()
        .map(|r| {
            vec![
                Cell::Text(r.scenario.clone()),
                Cell::Text(r.vehicle.clone()),
                Cell::Number(r.distance_km),
                Cell::Amount(r.fuel_price),
                Cell::Amount(r.fare),
            ]
        })
        .collect();
    let details_sheet = workbook.add_worksheet();
    write_table_sheet(details_sheet, "Comparison", &headers, &rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, title: &str, fares: &[f64]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("#,##0");

    sheet
        .write_string_with_format(0, 0, title, &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 0, "Rows:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, fares.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    if !fares.is_empty() {
        let min = fares.iter().copied().fold(f64::INFINITY, f64::min);
        let max = fares.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = fares.iter().sum::<f64>() / fares.len() as f64;

        for (row, (label, value)) in [("Lowest fare:", min), ("Highest fare:", max), ("Average fare:", mean)]
            .into_iter()
            .enumerate()
        {
            let row = (row + 3) as u32;
            sheet
                .write_string(row, 0, label)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number_with_format(row, 1, value, &amount_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .write_string(7, 0, "Currency:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(7, 1, CURRENCY)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_table_sheet(sheet: &mut Worksheet, name: &str, headers: &[String], rows: &[Vec<Cell>]) -> Result<()> {
    sheet
        .set_name(name)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("#,##0");
    let number_format = Format::new().set_num_format("0.00");

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .set_column_width(col as u16, 18)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, cells) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => sheet.write_string(row, col, text),
                Cell::Amount(value) => sheet.write_number_with_format(row, col, *value, &amount_format),
                Cell::Number(value) => sheet.write_number_with_format(row, col, *value, &number_format),
            }
            .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}
