//! In-memory network snapshots.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Line, LineNo, Station};

use super::convert::convert_network;
use super::error::NetworkError;
use super::file::NetworkFile;
use super::source::NetworkSource;

/// One immutable, validated copy of the network.
///
/// `generation` counts the reloads that led to this snapshot, so results
/// computed from it can be told apart from results of a later one.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    lines: Vec<Line>,
    generation: u64,
}

impl NetworkSnapshot {
    /// Create a snapshot from already-built lines.
    ///
    /// No validation is performed; use [`NetworkSnapshot::from_json`] or
    /// [`NetworkSnapshot::load`] for untrusted data.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            generation: 0,
        }
    }

    /// Parse and validate a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        Ok(Self::new(convert_network(file)?))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reload count of the network this snapshot was installed into.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All lines, in file order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by its number.
    pub fn line(&self, number: LineNo) -> Option<&Line> {
        self.lines.iter().find(|l| l.number == number)
    }

    /// Every station on every line, line by line.
    pub fn all_stations(&self) -> impl Iterator<Item = &Station> {
        self.lines.iter().flat_map(|l| l.stations.iter())
    }

    /// Total number of station records (interchanges count once per line).
    pub fn station_count(&self) -> usize {
        self.lines.iter().map(|l| l.stations.len()).sum()
    }

    /// Stations owned by `line`; empty for an unknown line.
    pub fn stations_on(&self, line: LineNo) -> Vec<Station> {
        self.line(line)
            .map(|l| l.stations.clone())
            .unwrap_or_default()
    }

    /// Stations named `name`, ignoring case.
    pub fn stations_named(&self, name: &str) -> Vec<Station> {
        self.all_stations()
            .filter(|s| s.matches_name(name))
            .cloned()
            .collect()
    }
}

impl NetworkSource for NetworkSnapshot {
    async fn stations_for_line(&self, line: LineNo) -> Result<Vec<Station>, NetworkError> {
        Ok(self.stations_on(line))
    }

    async fn find_stations_by_name(&self, name: &str) -> Result<Vec<Station>, NetworkError> {
        Ok(self.stations_named(name))
    }
}

/// Thread-safe, reloadable network.
///
/// A query takes one [`NetworkSnapshot`] with [`MetroNetwork::snapshot`]
/// and reads only from it, so a reload mid-query cannot mix old and new
/// data. A reload builds and validates the replacement before swapping it
/// in; snapshots already handed out stay valid.
#[derive(Clone)]
pub struct MetroNetwork {
    current: Arc<RwLock<Arc<NetworkSnapshot>>>,
}

impl MetroNetwork {
    /// Wrap an existing snapshot.
    pub fn new(snapshot: NetworkSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// Load the network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let snapshot = NetworkSnapshot::load(path)?;
        Ok(Self::new(snapshot))
    }

    /// Replace the current snapshot with the contents of `path`.
    ///
    /// On failure the existing snapshot is kept and the error returned.
    /// Returns the number of station records loaded.
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<usize, NetworkError> {
        let mut snapshot = NetworkSnapshot::load(path.as_ref())?;
        let count = snapshot.station_count();

        let mut current = self.current.write().await;
        snapshot.generation = current.generation + 1;
        let generation = snapshot.generation;
        *current = Arc::new(snapshot);

        info!(path = ?path.as_ref(), stations = count, generation, "Network reloaded");
        Ok(count)
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<NetworkSnapshot> {
        self.current.read().await.clone()
    }
}
