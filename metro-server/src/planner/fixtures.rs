//! Test networks shared by the planner tests.

use crate::domain::{Line, LineNo, Station, StationNo};
use crate::network::{NetworkError, NetworkSnapshot, NetworkSource};

pub fn station(line: u32, no: u32, name: &str) -> Station {
    Station {
        id: line * 100 + no,
        name: name.to_string(),
        latitude: 30.0 + f64::from(no) * 0.01,
        longitude: 31.0 + f64::from(line) * 0.01,
        station_no: StationNo(no),
        is_shared: false,
        shared_with: None,
        line: LineNo(line),
    }
}

pub fn shared(line: u32, no: u32, name: &str, with: u32) -> Station {
    Station {
        is_shared: true,
        shared_with: Some(LineNo(with)),
        ..station(line, no, name)
    }
}

pub fn line(number: u32, stations: Vec<Station>) -> Line {
    Line {
        id: number,
        name: format!("Line {number}"),
        number: LineNo(number),
        stations,
    }
}

pub fn names(stations: &[Station]) -> Vec<&str> {
    stations.iter().map(|s| s.name.as_str()).collect()
}

pub fn positions(stations: &[Station]) -> Vec<u32> {
    stations.iter().map(|s| s.station_no.0).collect()
}

/// Two five-station lines crossing at "Shared" (position 3 on both).
pub fn two_lines() -> NetworkSnapshot {
    NetworkSnapshot::new(vec![
        line(
            1,
            vec![
                station(1, 1, "Station 1"),
                station(1, 2, "Station 2"),
                shared(1, 3, "Shared", 2),
                station(1, 4, "Station 4"),
                station(1, 5, "Station 5"),
            ],
        ),
        line(
            2,
            vec![
                station(2, 1, "Station 6"),
                station(2, 2, "Station 7"),
                shared(2, 3, "Shared", 1),
                station(2, 4, "Station 9"),
                station(2, 5, "Station 10"),
            ],
        ),
    ])
}

/// Three six-station lines, pairwise connected by distinct interchanges.
pub fn three_lines() -> NetworkSnapshot {
    NetworkSnapshot::new(vec![
        line(
            1,
            vec![
                station(1, 1, "Station 1"),
                station(1, 2, "Station 2"),
                shared(1, 3, "Shared12", 2),
                shared(1, 4, "Shared13", 3),
                station(1, 5, "Station 5"),
                station(1, 6, "Station 6"),
            ],
        ),
        line(
            2,
            vec![
                station(2, 1, "Station 7"),
                station(2, 2, "Station 8"),
                shared(2, 3, "Shared12", 1),
                shared(2, 4, "Shared23", 3),
                station(2, 5, "Station 11"),
                station(2, 6, "Station 12"),
            ],
        ),
        line(
            3,
            vec![
                station(3, 1, "Station 13"),
                station(3, 2, "Station 14"),
                shared(3, 3, "Shared13", 1),
                shared(3, 4, "Shared23", 2),
                station(3, 5, "Station 17"),
                station(3, 6, "Station 18"),
            ],
        ),
    ])
}

/// Wraps a snapshot and returns every list in reverse.
///
/// Used to show that tie-breaks do not depend on source ordering.
pub struct ReversedSource(pub NetworkSnapshot);

impl NetworkSource for ReversedSource {
    async fn stations_for_line(&self, line: LineNo) -> Result<Vec<Station>, NetworkError> {
        let mut stations = self.0.stations_on(line);
        stations.reverse();
        Ok(stations)
    }

    async fn find_stations_by_name(&self, name: &str) -> Result<Vec<Station>, NetworkError> {
        let mut stations = self.0.stations_named(name);
        stations.reverse();
        Ok(stations)
    }
}

/// A source whose every call fails.
pub struct FailingSource;

impl NetworkSource for FailingSource {
    async fn stations_for_line(&self, _line: LineNo) -> Result<Vec<Station>, NetworkError> {
        Err(NetworkError::Unavailable("test source".into()))
    }

    async fn find_stations_by_name(&self, _name: &str) -> Result<Vec<Station>, NetworkError> {
        Err(NetworkError::Unavailable("test source".into()))
    }
}
