//! Interchange discovery between two lines.

use crate::domain::{LineNo, Station};
use crate::network::NetworkSource;

use super::config::TieBreak;
use super::error::PlannerError;

/// Finds the shared stations connecting two lines.
pub struct InterchangeResolver<'a, S: NetworkSource> {
    source: &'a S,
    tie_break: TieBreak,
}

impl<'a, S: NetworkSource> InterchangeResolver<'a, S> {
    pub fn new(source: &'a S, tie_break: TieBreak) -> Self {
        Self { source, tie_break }
    }

    /// Interchange records connecting `line_a` and `line_b`.
    ///
    /// `line_a`'s records pointing at `line_b` come first, then `line_b`'s
    /// records pointing at `line_a`.
    pub async fn shared_stations(
        &self,
        line_a: LineNo,
        line_b: LineNo,
    ) -> Result<Vec<Station>, PlannerError> {
        let (on_a, on_b) = futures::try_join!(
            self.source.stations_for_line(line_a),
            self.source.stations_for_line(line_b),
        )?;

        Ok(on_a
            .into_iter()
            .filter(|s| s.is_interchange_with(line_b))
            .chain(on_b.into_iter().filter(|s| s.is_interchange_with(line_a)))
            .collect())
    }

    /// The interchange to change at when going from `line_a` to `line_b`.
    ///
    /// Returns the record to leave `line_a` at and the matching record to
    /// join `line_b` at, or `None` if the lines are not directly connected.
    pub async fn interchange_pair(
        &self,
        line_a: LineNo,
        line_b: LineNo,
    ) -> Result<Option<(Station, Station)>, PlannerError> {
        let shared = self.shared_stations(line_a, line_b).await?;
        Ok(pick_pair(&shared, line_a, line_b, self.tie_break))
    }
}

/// Choose an interchange pair from the output of `shared_stations`.
///
/// Candidates on `line_a` are tried in tie-break order; the first one with
/// a same-named partner on `line_b` wins.
pub fn pick_pair(
    shared: &[Station],
    line_a: LineNo,
    line_b: LineNo,
    tie_break: TieBreak,
) -> Option<(Station, Station)> {
    let mut leaving: Vec<&Station> = shared.iter().filter(|s| s.line == line_a).collect();
    if tie_break == TieBreak::LowestNumber {
        leaving.sort_by_key(|s| s.station_no);
    }

    leaving.into_iter().find_map(|leave| {
        shared
            .iter()
            .find(|join| join.line == line_b && join.matches_name(&leave.name))
            .map(|join| (leave.clone(), join.clone()))
    })
}
