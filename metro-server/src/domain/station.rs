//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineNo;
use crate::geo::GeoPoint;

/// Ordinal position of a station within its owning line.
///
/// Unique per line; the ordering defines physical adjacency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StationNo(pub u32);

impl StationNo {
    /// Number of stations in the inclusive run between `self` and `other`.
    ///
    /// ```
    /// use metro_server::domain::StationNo;
    ///
    /// assert_eq!(StationNo(2).span_to(StationNo(5)), 4);
    /// assert_eq!(StationNo(5).span_to(StationNo(2)), 4);
    /// assert_eq!(StationNo(3).span_to(StationNo(3)), 1);
    /// ```
    pub fn span_to(self, other: StationNo) -> usize {
        self.0.abs_diff(other.0) as usize + 1
    }
}

impl fmt::Display for StationNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stop, owned by exactly one line.
///
/// An interchange is modelled as two `Station` records with the same name,
/// one per connected line, each naming the other line in `shared_with`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Storage identity.
    pub id: u32,

    /// Display name. Not unique across the network (interchanges repeat it).
    pub name: String,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Position within the owning line.
    pub station_no: StationNo,

    /// Whether this record is one side of a shared interchange.
    pub is_shared: bool,

    /// The other line this interchange connects to.
    pub shared_with: Option<LineNo>,

    /// Owning line.
    pub line: LineNo,
}

impl Station {
    /// Geographic location of the station.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Case-insensitive name comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// True if this record is an interchange towards `other`.
    pub fn is_interchange_with(&self, other: LineNo) -> bool {
        self.is_shared && self.shared_with == Some(other)
    }
}

/// Compare two station names ignoring case.
///
/// This is the single name-matching policy used by every lookup.
///
/// ```
/// use metro_server::domain::same_name;
///
/// assert!(same_name("Sadat", "SADAT"));
/// assert!(!same_name("Sadat", "Sadat "));
/// ```
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sadat(line: u32, shared_with: Option<u32>) -> Station {
        Station {
            id: 1,
            name: "Sadat".to_string(),
            latitude: 30.0444,
            longitude: 31.2357,
            station_no: StationNo(19),
            is_shared: shared_with.is_some(),
            shared_with: shared_with.map(LineNo),
            line: LineNo(line),
        }
    }

    #[test]
    fn matches_name_is_case_insensitive() {
        let s = sadat(1, Some(2));
        assert!(s.matches_name("Sadat"));
        assert!(s.matches_name("sadat"));
        assert!(s.matches_name("SaDaT"));
        assert!(!s.matches_name("Sada"));
    }

    #[test]
    fn same_name_handles_non_ascii() {
        assert!(same_name("السادات", "السادات"));
        assert!(same_name("ÉCOLE", "école"));
    }

    #[test]
    fn interchange_requires_flag_and_target() {
        assert!(sadat(1, Some(2)).is_interchange_with(LineNo(2)));
        assert!(!sadat(1, Some(2)).is_interchange_with(LineNo(3)));
        assert!(!sadat(1, None).is_interchange_with(LineNo(2)));

        // shared_with without the flag does not count
        let mut s = sadat(1, Some(2));
        s.is_shared = false;
        assert!(!s.is_interchange_with(LineNo(2)));
    }

    #[test]
    fn location_uses_coordinates() {
        let p = sadat(1, None).location();
        assert_eq!(p.latitude, 30.0444);
        assert_eq!(p.longitude, 31.2357);
    }

    #[test]
    fn span_is_inclusive() {
        assert_eq!(StationNo(1).span_to(StationNo(1)), 1);
        assert_eq!(StationNo(1).span_to(StationNo(10)), 10);
        assert_eq!(StationNo(10).span_to(StationNo(1)), 10);
    }
}
