//! Name-based station lookup.

use crate::domain::{LineNo, Station};
use crate::network::NetworkSource;

use super::config::TieBreak;
use super::error::PlannerError;

/// Resolves station names to station records.
///
/// Matching is case-insensitive everywhere. Results are ordered by the
/// configured tie-break so "the first candidate line" is well defined.
pub struct StationDirectory<'a, S: NetworkSource> {
    source: &'a S,
    tie_break: TieBreak,
}

impl<'a, S: NetworkSource> StationDirectory<'a, S> {
    pub fn new(source: &'a S, tie_break: TieBreak) -> Self {
        Self { source, tie_break }
    }

    /// Every station record carrying `name`, each with its owning line.
    ///
    /// Returns an empty list when nothing matches.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Station>, PlannerError> {
        let mut stations = self.source.find_stations_by_name(name).await?;
        if self.tie_break == TieBreak::LowestNumber {
            // stable: records on the same line keep source order
            stations.sort_by_key(|s| s.line);
        }
        Ok(stations)
    }

    /// Owning line numbers of every record carrying `name`.
    ///
    /// May repeat a line if the data repeats a name on one line.
    pub async fn line_numbers_for_name(&self, name: &str) -> Result<Vec<LineNo>, PlannerError> {
        let stations = self.find_by_name(name).await?;
        Ok(line_numbers(&stations))
    }

    /// Lines serving `name`, without repeats.
    pub async fn distinct_line_numbers_for_name(
        &self,
        name: &str,
    ) -> Result<Vec<LineNo>, PlannerError> {
        let mut lines = self.line_numbers_for_name(name).await?;
        let mut seen = Vec::with_capacity(lines.len());
        lines.retain(|line| {
            if seen.contains(line) {
                false
            } else {
                seen.push(*line);
                true
            }
        });
        Ok(lines)
    }
}

/// Owning line of each station, in order.
pub fn line_numbers(stations: &[Station]) -> Vec<LineNo> {
    stations.iter().map(|s| s.line).collect()
}
