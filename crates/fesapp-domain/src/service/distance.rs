//! Trip distance providers
//!
//! A distance is either typed in by the rider or measured between two map
//! points on the WGS-84 ellipsoid (Vincenty's inverse formula).

use fesapp_types::FareError;
use serde::{Deserialize, Serialize};

use crate::model::GeoPoint;

/// WGS-84 semi-major axis in meters
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Mean earth radius in kilometers (haversine fallback)
const EARTH_RADIUS_KM: f64 = 6371.0;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Anything that can supply a trip distance in km
pub trait DistanceProvider {
    fn distance_km(&self) -> Result<f64, FareError>;
}

/// Where a trip distance comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceSource {
    /// Entered by hand
    Manual(f64),
    /// Measured between two points
    Between(GeoPoint, GeoPoint),
}

impl DistanceProvider for DistanceSource {
    fn distance_km(&self) -> Result<f64, FareError> {
        match *self {
            DistanceSource::Manual(km) => {
                if km.is_finite() && km >= 0.0 {
                    Ok(km)
                } else {
                    Err(FareError::InvalidParameter {
                        name: "distance_km",
                        value: km,
                        reason: "must be a non-negative number",
                    })
                }
            }
            DistanceSource::Between(from, to) => Ok(geodesic_km(&from, &to)),
        }
    }
}

/// Great-circle distance on a sphere
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Geodesic distance on the WGS-84 ellipsoid
///
/// Nearly antipodal points can keep Vincenty's iteration from converging; those
/// fall back to the haversine distance.
pub fn geodesic_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    vincenty_m(from, to)
        .map(|m| m / 1000.0)
        .unwrap_or_else(|| haversine_km(from, to))
}

fn vincenty_m(from: &GeoPoint, to: &GeoPoint) -> Option<f64> {
    let b = (1.0 - WGS84_F) * WGS84_A;
    let l = (to.lon - from.lon).to_radians();
    let u1 = ((1.0 - WGS84_F) * from.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * to.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos_sq_alpha == 0
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - previous).abs() < VINCENTY_TOLERANCE {
            let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            return Some(b * big_a * (sigma - delta_sigma));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_one_degree_of_longitude_on_equator() {
        // a * pi / 180
        let d = geodesic_km(&point(0.0, 0.0), &point(0.0, 1.0));
        assert!((d - 111.319_49).abs() < 0.001, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_latitude_from_equator() {
        let d = geodesic_km(&point(0.0, 0.0), &point(1.0, 0.0));
        assert!((d - 110.574).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_same_point_is_zero() {
        let d = geodesic_km(&GeoPoint::FREETOWN, &GeoPoint::FREETOWN);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = point(8.4844, -13.2344);
        let b = point(8.4657, -13.2317);
        assert!((geodesic_km(&a, &b) - geodesic_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_close_to_haversine_for_short_trips() {
        let a = point(8.4844, -13.2344);
        let b = point(8.4300, -13.1500);
        let geodesic = geodesic_km(&a, &b);
        let spherical = haversine_km(&a, &b);
        assert!(geodesic > 10.0 && geodesic < 12.0, "got {}", geodesic);
        assert!((geodesic - spherical).abs() / geodesic < 0.01);
    }

    #[test]
    fn test_antipodal_falls_back() {
        let d = geodesic_km(&point(0.0, 0.0), &point(0.5, 179.7));
        assert!(d.is_finite() && d > 19_000.0);
    }

    #[test]
    fn test_manual_distance() {
        assert_eq!(DistanceSource::Manual(4.2).distance_km(), Ok(4.2));
        assert!(DistanceSource::Manual(-1.0).distance_km().is_err());
        assert!(DistanceSource::Manual(f64::NAN).distance_km().is_err());
    }

    #[test]
    fn test_measured_distance() {
        let src = DistanceSource::Between(point(0.0, 0.0), point(0.0, 1.0));
        let d = src.distance_km().unwrap();
        assert!((d - 111.319).abs() < 0.01);
    }
}
