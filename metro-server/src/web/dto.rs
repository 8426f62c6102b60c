//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station};
use crate::planner::TripSummary;

/// A line in the line listing.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Rider-facing line number
    pub number: u32,

    /// Line name
    pub name: String,

    /// Number of station records on the line
    pub station_count: usize,
}

impl LineSummary {
    pub fn from_line(line: &Line) -> Self {
        Self {
            number: line.number.0,
            name: line.name.clone(),
            station_count: line.stations.len(),
        }
    }
}

/// A station record.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: u32,
    pub name: String,

    /// Owning line number
    pub line: u32,

    /// Position on the owning line
    pub station_no: u32,

    pub latitude: f64,
    pub longitude: f64,

    /// Whether this is one side of an interchange
    pub is_shared: bool,

    /// Line the interchange connects to
    pub shared_with: Option<u32>,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.clone(),
            line: station.line.0,
            station_no: station.station_no.0,
            latitude: station.latitude,
            longitude: station.longitude,
            is_shared: station.is_shared,
            shared_with: station.shared_with.map(|l| l.0),
        }
    }
}

/// Stations of one line, in travel order.
#[derive(Debug, Serialize)]
pub struct LineStationsResponse {
    pub number: u32,
    pub name: String,
    pub stations: Vec<StationResult>,
}

/// Request for the lines serving a station.
#[derive(Debug, Deserialize)]
pub struct StationLinesRequest {
    /// Station name (case-insensitive)
    pub station: String,
}

/// Lines serving a station.
#[derive(Debug, Serialize)]
pub struct StationLinesResponse {
    pub station: String,
    pub lines: Vec<u32>,
}

/// Request for a path between two stations.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// A resolved path.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Station names in travel order, each once
    pub stations: Vec<String>,

    /// Number of distinct stations
    pub stop_count: usize,

    /// Stops charged for; an interchange counts once per line
    pub charged_stops: usize,

    /// Fare for the trip
    pub fare: u32,

    /// Estimated travel time in minutes
    pub travel_time_mins: f64,

    /// Number of line changes
    pub changes: usize,

    /// Raw station records; an interchange appears once per line
    pub path: Vec<StationResult>,
}

impl PathResponse {
    pub fn new(summary: TripSummary, path: &[Station]) -> Self {
        Self {
            stations: summary.stations,
            stop_count: summary.stop_count,
            charged_stops: summary.charged_stops,
            fare: summary.fare,
            travel_time_mins: summary.travel_time.num_seconds() as f64 / 60.0,
            changes: summary.changes,
            path: path.iter().map(StationResult::from_station).collect(),
        }
    }
}

/// Request for the distance between two points (degrees).
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

/// Distance between two points.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub km: f64,
}

/// Request for the station nearest a location.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// The nearest station.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub name: String,
    pub line: u32,
    pub distance_km: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
