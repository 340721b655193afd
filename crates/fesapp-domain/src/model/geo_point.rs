//! Geographic point type definitions

use fesapp_types::FareError;
use serde::{Deserialize, Serialize};

/// A WGS-84 latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Freetown city center, used when no location is known
    pub const FREETOWN: GeoPoint = GeoPoint { lat: 8.48, lon: -13.23 };

    pub fn new(lat: f64, lon: f64) -> Result<Self, FareError> {
        if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(FareError::InvalidParameter {
                name: "latitude",
                value: lat,
                reason: "must be within [-90, 90]",
            });
        }
        if !(lon.is_finite() && (-180.0..=180.0).contains(&lon)) {
            return Err(FareError::InvalidParameter {
                name: "longitude",
                value: lon,
                reason: "must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = String;

    /// Parse "lat,lon"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lon\", got \"{}\"", s))?;
        let lat: f64 = lat.trim().parse().map_err(|_| format!("invalid latitude: {}", lat.trim()))?;
        let lon: f64 = lon.trim().parse().map_err(|_| format!("invalid longitude: {}", lon.trim()))?;
        GeoPoint::new(lat, lon).map_err(|e| e.to_string())
    }
}
