//! Planner error types.

use crate::domain::LineNo;
use crate::network::NetworkError;

/// Error from a planner query.
///
/// Every variant is scoped to the one request that produced it.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// A station name matched no record
    #[error("unknown station: {name}")]
    UnknownStation { name: String },

    /// The anchor lines of a cross-line path share no interchange
    #[error("no interchange connects line {from_line} and line {to_line}")]
    NoInterchange { from_line: LineNo, to_line: LineNo },

    /// Nearest-station ranking was given nothing to rank
    #[error("no stations to rank")]
    EmptyCandidateSet,

    /// The network source failed
    #[error(transparent)]
    Source(#[from] NetworkError),
}

impl PlannerError {
    pub(crate) fn unknown(name: &str) -> Self {
        PlannerError::UnknownStation {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlannerError::unknown("Nowhere");
        assert_eq!(err.to_string(), "unknown station: Nowhere");

        let err = PlannerError::NoInterchange {
            from_line: LineNo(1),
            to_line: LineNo(4),
        };
        assert_eq!(err.to_string(), "no interchange connects line 1 and line 4");

        let err = PlannerError::EmptyCandidateSet;
        assert_eq!(err.to_string(), "no stations to rank");

        let err = PlannerError::from(NetworkError::Unavailable("offline".into()));
        assert_eq!(err.to_string(), "network source unavailable: offline");
    }
}
