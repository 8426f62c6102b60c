//! Conversion from on-disk records to domain lines.

use std::collections::HashSet;

use tracing::warn;

use crate::domain::{Line, LineNo, Station, StationNo};

use super::error::NetworkError;
use super::file::{LineRecord, NetworkFile, StationRecord};

/// Convert a parsed network file into validated domain lines.
///
/// Rejects data that would make routing ambiguous: repeated line numbers,
/// repeated positions within a line, and interchanges pointing at their own
/// line or at a line that is not in the file. Half-specified interchanges
/// (flag without target or target without flag) are kept but logged; the
/// planner ignores them.
pub fn convert_network(file: NetworkFile) -> Result<Vec<Line>, NetworkError> {
    let mut numbers = HashSet::new();
    for record in &file.lines {
        if !numbers.insert(record.number) {
            return Err(NetworkError::DuplicateLine(LineNo(record.number)));
        }
    }

    file.lines
        .into_iter()
        .map(|record| convert_line(record, &numbers))
        .collect()
}

fn convert_line(record: LineRecord, known_lines: &HashSet<u32>) -> Result<Line, NetworkError> {
    let number = LineNo(record.number);
    let mut positions = HashSet::new();
    let mut stations = Vec::with_capacity(record.stations.len());

    for station in record.stations {
        if !positions.insert(station.station_no) {
            return Err(NetworkError::DuplicateStationNo {
                line: number,
                station_no: StationNo(station.station_no),
            });
        }
        stations.push(convert_station(station, number, known_lines)?);
    }

    Ok(Line {
        id: record.id,
        name: record.name,
        number,
        stations,
    })
}

fn convert_station(
    record: StationRecord,
    line: LineNo,
    known_lines: &HashSet<u32>,
) -> Result<Station, NetworkError> {
    if let Some(other) = record.shared_with
        && (other == line.0 || !known_lines.contains(&other))
    {
        return Err(NetworkError::InvalidSharedWith {
            line,
            station: record.name,
            shared_with: LineNo(other),
        });
    }

    if record.is_shared != record.shared_with.is_some() {
        warn!(
            line = %line,
            station = %record.name,
            is_shared = record.is_shared,
            shared_with = ?record.shared_with,
            "Half-specified interchange, it will not be used for routing"
        );
    }

    Ok(Station {
        id: record.id,
        name: record.name,
        latitude: record.latitude,
        longitude: record.longitude,
        station_no: StationNo(record.station_no),
        is_shared: record.is_shared,
        shared_with: record.shared_with.map(LineNo),
        line,
    })
}
