//! On-disk layout of a network file.
//!
//! These types mirror the JSON exactly; `convert` turns them into domain
//! types and checks the invariants the planner relies on.

use serde::{Deserialize, Serialize};

/// Top-level network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkFile {
    pub lines: Vec<LineRecord>,
}

/// A line as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: u32,
    pub name: String,
    pub number: u32,
    #[serde(default)]
    pub stations: Vec<StationRecord>,
}

/// A station as stored on disk. The owning line is implied by nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub station_no: u32,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub shared_with: Option<u32>,
}
