//! Metro line types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Station;

/// Rider-facing line number.
///
/// Distinct from the line's storage identity; this is the only identifier
/// the routing logic uses.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineNo;
///
/// let line = LineNo(2);
/// assert_eq!(line.to_string(), "2");
/// assert!(LineNo(1) < line);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LineNo(pub u32);

impl fmt::Display for LineNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A metro line and the stations assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Storage identity.
    pub id: u32,

    /// Human-readable name (e.g. "Helwan - New El-Marg").
    pub name: String,

    /// Rider-facing line number.
    pub number: LineNo,

    /// Stations owned by this line, in no particular order.
    pub stations: Vec<Station>,
}
