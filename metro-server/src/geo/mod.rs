//! Great-circle distance on a spherical Earth.
//!
//! Inputs are degrees; outputs are kilometres. Non-finite inputs are the
//! caller's problem and propagate as NaN.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert degrees to radians.
///
/// ```
/// use metro_server::geo::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(0.0), 0.0);
/// assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Haversine distance in kilometres between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = degrees_to_radians(lat2 - lat1);
    let d_lon = degrees_to_radians(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + degrees_to_radians(lat1).cos()
            * degrees_to_radians(lat2).cos()
            * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn lat() -> impl Strategy<Value = f64> {
        -90.0f64..=90.0
    }

    fn lon() -> impl Strategy<Value = f64> {
        -180.0f64..=180.0
    }

    proptest! {
        /// Distance from a point to itself is exactly zero
        #[test]
        fn identity(la in lat(), lo in lon()) {
            prop_assert_eq!(haversine_km(la, lo, la, lo), 0.0);
        }

        /// Swapping the endpoints gives the same distance
        #[test]
        fn symmetric(la1 in lat(), lo1 in lon(), la2 in lat(), lo2 in lon()) {
            prop_assert_eq!(haversine_km(la1, lo1, la2, lo2), haversine_km(la2, lo2, la1, lo1));
        }

        /// Never negative, never more than half the circumference
        #[test]
        fn bounded(la1 in lat(), lo1 in lon(), la2 in lat(), lo2 in lon()) {
            let km = haversine_km(la1, lo1, la2, lo2);
            prop_assert!(km >= 0.0);
            prop_assert!(km <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-9, "{}", km);
        }
    }
}
