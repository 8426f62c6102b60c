//! Nearest-station ranking by great-circle distance.

use crate::domain::Station;
use crate::geo::GeoPoint;

use super::error::PlannerError;

/// The station closest to (`latitude`, `longitude`) and its distance in km.
///
/// Ties go to the station encountered first. Fails with
/// `EmptyCandidateSet` when `stations` is empty.
pub fn nearest_station<'s>(
    latitude: f64,
    longitude: f64,
    stations: impl IntoIterator<Item = &'s Station>,
) -> Result<(&'s Station, f64), PlannerError> {
    let origin = GeoPoint::new(latitude, longitude);
    let mut best: Option<(&Station, f64)> = None;

    for station in stations {
        let distance = origin.distance_km(&station.location());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            // NaN never beats an existing candidate
            Some(_) if distance.is_nan() => {}
            _ => best = Some((station, distance)),
        }
    }

    best.ok_or(PlannerError::EmptyCandidateSet)
}
