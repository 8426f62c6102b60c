//! Network loading error types.

use std::path::PathBuf;

use crate::domain::{LineNo, StationNo};

/// Errors from loading or querying network data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The network file could not be read
    #[error("failed to read network file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The network file is not valid JSON for the expected layout
    #[error("failed to parse network data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two lines share a line number
    #[error("line number {0} is used by more than one line")]
    DuplicateLine(LineNo),

    /// Two stations on one line share a position
    #[error("line {line} has more than one station at position {station_no}")]
    DuplicateStationNo { line: LineNo, station_no: StationNo },

    /// An interchange points at its own line or a line that does not exist
    #[error("station {station:?} on line {line} is shared with invalid line {shared_with}")]
    InvalidSharedWith {
        line: LineNo,
        station: String,
        shared_with: LineNo,
    },

    /// The data source could not answer
    #[error("network source unavailable: {0}")]
    Unavailable(String),
}
