//! Rider-facing summaries of a resolved path.

use std::collections::HashSet;

use chrono::Duration;

use crate::domain::Station;

use super::config::FareConfig;

/// Stops, fare and estimated time for a path.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    /// Station names in travel order, each listed once.
    pub stations: Vec<String>,

    /// Number of distinct stations passed through, both ends included.
    pub stop_count: usize,

    /// Number of stops charged for: one per path record.
    pub charged_stops: usize,

    /// Ticket price for the trip.
    pub fare: u32,

    /// Estimated time on board.
    pub travel_time: Duration,

    /// Number of line changes along the path.
    pub changes: usize,
}

impl TripSummary {
    /// Summarise a path as returned by `PathComposer`.
    ///
    /// The interchange at a line change appears twice in a composed path.
    /// `stations` and `stop_count` list it once (names compared ignoring
    /// case), but fare and time are charged per record, so a change costs
    /// one extra stop.
    pub fn from_path(path: &[Station], fares: &FareConfig) -> Self {
        let mut seen = HashSet::new();
        let stations: Vec<String> = path
            .iter()
            .filter(|s| seen.insert(s.name.to_lowercase()))
            .map(|s| s.name.clone())
            .collect();
        let stop_count = stations.len();
        let charged_stops = path.len();

        Self {
            stations,
            stop_count,
            charged_stops,
            fare: fares.fare_for(charged_stops),
            travel_time: fares.travel_time(charged_stops),
            changes: path.windows(2).filter(|w| w[0].line != w[1].line).count(),
        }
    }
}
