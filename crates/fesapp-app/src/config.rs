//! Configuration management for fesapp
//!
//! Config stored at: ~/.config/fesapp/config.json

use std::path::{Path, PathBuf};

use fesapp_domain::{FareCalculator, Tariff};
use fesapp_types::{ConfigError, Error, OutputFormat, Result, ValidationMode};
use serde::{Deserialize, Serialize};

use crate::constants::{standard_tariff, REFERENCE_FUEL_PRICE};

/// Default daily fuel price increase in trend simulations
pub const DEFAULT_TREND_FUEL_STEP: f64 = 200.0;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle used when none is given on the command line
    #[serde(default = "default_vehicle")]
    pub default_vehicle: String,

    /// Fuel price used when none is given (SLL)
    #[serde(default = "default_fuel_price")]
    pub fuel_price: f64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// TOML tariff replacing the standard fare tables
    #[serde(default)]
    pub tariff_path: Option<PathBuf>,

    /// Input validation (strict, compatible)
    #[serde(default)]
    pub validation: ValidationMode,

    /// Daily fuel price increase in trend simulations
    #[serde(default = "default_trend_fuel_step")]
    pub trend_fuel_step: f64,
}

fn default_vehicle() -> String {
    "minibus".to_string()
}

fn default_fuel_price() -> f64 {
    REFERENCE_FUEL_PRICE
}

fn default_trend_fuel_step() -> f64 {
    DEFAULT_TREND_FUEL_STEP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_vehicle: default_vehicle(),
            fuel_price: default_fuel_price(),
            output_format: OutputFormat::default(),
            tariff_path: None,
            validation: ValidationMode::default(),
            trend_fuel_step: default_trend_fuel_step(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fesapp");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or create default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Tariff in effect: the configured file, or the standard tables
    pub fn tariff(&self) -> Result<Tariff> {
        match self.tariff_path {
            Some(ref path) => load_tariff(path),
            None => Ok(standard_tariff().clone()),
        }
    }

    /// Calculator over the active tariff with the configured validation
    pub fn calculator(&self) -> Result<FareCalculator> {
        Ok(FareCalculator::new(self.tariff()?).with_validation(self.validation))
    }
}

/// Load and validate a TOML tariff file
pub fn load_tariff(path: &Path) -> Result<Tariff> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let tariff: Tariff = toml::from_str(&content)?;
    tariff.validate()?;
    Ok(tariff)
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FEsApp Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Default vehicle:  {}", self.default_vehicle)?;
        writeln!(f, "Fuel price:       {} SLL", self.fuel_price)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(
            f,
            "Tariff:           {}",
            self.tariff_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(standard)".to_string())
        )?;
        writeln!(f, "Validation:       {}", self.validation)?;
        writeln!(f, "Trend fuel step:  {} SLL/day", self.trend_fuel_step)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CUSTOM_TARIFF: &str = r#"
reference_fuel_price = 25000.0
weekend_multiplier = 1.2

[weather_surcharge]
clear = 0.0
cloudy = 0.0
rainy = 300.0
stormy = 600.0

[period_surcharge]
morning_peak = 500.0
afternoon_peak = 500.0
evening_peak = 500.0
off_peak = 0.0

[[vehicles]]
name = "okada"
base_fare = 3000.0
per_km_rate = 400.0
fuel_sensitivity = 0.5
traffic_surcharge_by_level = [100.0, 200.0, 300.0]
"#;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fuel_price, 30000.0);
        assert_eq!(config.trend_fuel_step, 200.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_vehicle: "keke".to_string(),
            output_format: OutputFormat::Json,
            validation: ValidationMode::Compatible,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_vehicle": "taxi"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_vehicle, "taxi");
        assert_eq!(config.validation, ValidationMode::Strict);
        assert!(config.tariff_path.is_none());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_custom_tariff_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(&path, CUSTOM_TARIFF).unwrap();

        let config = Config {
            tariff_path: Some(path),
            ..Config::default()
        };
        let calc = config.calculator().unwrap();
        assert!(calc.tariff().profile("okada").is_some());
        assert!(calc.tariff().profile("minibus").is_none());

        // 3000 + 0 + (25000 - 25000) + 200 = 3200 -> 3200 * 1.2 = 3840
        let (total, _) = calc
            .compute("okada", 0.0, 25000.0, "moderate", "clear", "off-peak", "weekend")
            .unwrap();
        assert_eq!(total, 3800.0);
    }

    #[test]
    fn test_invalid_tariff_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(&path, CUSTOM_TARIFF.replace("1.2", "-1.0")).unwrap();
        let err = load_tariff(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidTariff(_))));
    }

    #[test]
    fn test_short_traffic_tiers_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariff.toml");
        std::fs::write(&path, CUSTOM_TARIFF.replace("[100.0, 200.0, 300.0]", "[100.0, 200.0]")).unwrap();
        assert!(matches!(load_tariff(&path).unwrap_err(), Error::Toml(_)));
    }

    #[test]
    fn test_missing_tariff_file() {
        let err = load_tariff(Path::new("/nonexistent/tariff.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
