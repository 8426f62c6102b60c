//! Path composition between two named stations.
//!
//! A query is answered in two steps. `classify` looks both names up and
//! decides how the rider travels: along one common line, or along two
//! lines joined by a single interchange. `compose` turns that decision into
//! the ordered station sequence by slicing and concatenating line segments.
//!
//! Only one interchange hop is ever considered. Two stations whose anchor
//! lines are not directly connected are reported as unresolvable even if a
//! route through a third line exists.
//!
//! When a path changes lines, the interchange appears twice: once as the
//! last station of the first segment (on the first line) and once as the
//! first station of the second segment (on the second line). Callers that
//! need a rider-facing stop count must de-duplicate.

use tracing::debug;

use crate::domain::{LineNo, Station};
use crate::network::NetworkSource;

use super::config::PlannerConfig;
use super::directory::{StationDirectory, line_numbers};
use super::error::PlannerError;
use super::interchange::InterchangeResolver;
use super::topology::LineTopology;

/// How a path between two stations will be built.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Both stations lie on `line`.
    SameLine {
        line: LineNo,
        from: Station,
        to: Station,
    },

    /// Ride `from`'s line to `leave`, change to `join`, ride on to `to`.
    ViaInterchange {
        from: Station,
        leave: Station,
        join: Station,
        to: Station,
    },

    /// The anchor lines share no interchange.
    Unresolvable { from_line: LineNo, to_line: LineNo },
}

/// Which lines to route on, given each station's candidate lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChoice {
    /// A line serving both stations.
    Common(LineNo),

    /// No common line: start on `from`, finish on `to`.
    Anchors { from: LineNo, to: LineNo },
}

/// Pick the routing lines from tie-break-ordered candidate lists.
///
/// The common line is the first of `from_lines` also in `to_lines`.
/// Returns `None` if either list is empty.
pub fn choose_lines(from_lines: &[LineNo], to_lines: &[LineNo]) -> Option<LineChoice> {
    let from = *from_lines.first()?;
    let to = *to_lines.first()?;

    Some(
        match from_lines.iter().find(|line| to_lines.contains(line)) {
            Some(common) => LineChoice::Common(*common),
            None => LineChoice::Anchors { from, to },
        },
    )
}

/// Builds station sequences between named stations.
pub struct PathComposer<'a, S: NetworkSource> {
    source: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, S: NetworkSource> PathComposer<'a, S> {
    /// Create a new composer.
    pub fn new(source: &'a S, config: &'a PlannerConfig) -> Self {
        Self { source, config }
    }

    /// Resolve the ordered stations from `from` to `to`.
    pub async fn resolve_path(&self, from: &str, to: &str) -> Result<Vec<Station>, PlannerError> {
        let decision = self.classify(from, to).await?;
        self.compose(&decision).await
    }

    /// Decide how to route between two station names.
    ///
    /// Fails with `UnknownStation` if either name matches nothing.
    pub async fn classify(&self, from: &str, to: &str) -> Result<RouteDecision, PlannerError> {
        let directory = StationDirectory::new(self.source, self.config.tie_break);
        let (from_candidates, to_candidates) =
            futures::try_join!(directory.find_by_name(from), directory.find_by_name(to))?;

        if from_candidates.is_empty() {
            return Err(PlannerError::unknown(from));
        }
        if to_candidates.is_empty() {
            return Err(PlannerError::unknown(to));
        }

        let from_lines = line_numbers(&from_candidates);
        let to_lines = line_numbers(&to_candidates);
        let choice = choose_lines(&from_lines, &to_lines).ok_or_else(|| PlannerError::unknown(from))?;

        let decision = match choice {
            LineChoice::Common(line) => RouteDecision::SameLine {
                line,
                from: on_line(&from_candidates, line, from)?,
                to: on_line(&to_candidates, line, to)?,
            },
            LineChoice::Anchors {
                from: from_line,
                to: to_line,
            } => {
                let resolver = InterchangeResolver::new(self.source, self.config.tie_break);
                match resolver.interchange_pair(from_line, to_line).await? {
                    Some((leave, join)) => RouteDecision::ViaInterchange {
                        from: on_line(&from_candidates, from_line, from)?,
                        leave,
                        join,
                        to: on_line(&to_candidates, to_line, to)?,
                    },
                    None => RouteDecision::Unresolvable { from_line, to_line },
                }
            }
        };

        debug!(from, to, ?choice, "Classified route");
        Ok(decision)
    }

    /// Build the station sequence for a routing decision.
    pub async fn compose(&self, decision: &RouteDecision) -> Result<Vec<Station>, PlannerError> {
        let topology = LineTopology::new(self.source);

        match decision {
            RouteDecision::SameLine { from, to, .. } => topology.directional_slice(from, to).await,

            RouteDecision::ViaInterchange {
                from,
                leave,
                join,
                to,
            } => {
                let mut path = topology.directional_slice(from, leave).await?;
                if join.station_no != to.station_no {
                    path.extend(topology.directional_slice(join, to).await?);
                }
                Ok(path)
            }

            RouteDecision::Unresolvable { from_line, to_line } => Err(PlannerError::NoInterchange {
                from_line: *from_line,
                to_line: *to_line,
            }),
        }
    }
}

/// The candidate record owned by `line`.
fn on_line(candidates: &[Station], line: LineNo, name: &str) -> Result<Station, PlannerError> {
    candidates
        .iter()
        .find(|s| s.line == line)
        .cloned()
        .ok_or_else(|| PlannerError::unknown(name))
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
