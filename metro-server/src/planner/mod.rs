//! Path planning over a metro network.
//!
//! This module answers the two rider questions the network exists for:
//! "which stations do I pass through from A to B?" and "which station is
//! closest to me?".
//!
//! Paths follow one line, or two lines joined by a single interchange. The
//! building block is the directional slice: the run of stations between two
//! positions on a line, in the direction of travel.

mod config;
mod directory;
mod error;
mod fare;
mod interchange;
mod nearest;
mod path;
mod topology;

#[cfg(test)]
mod fixtures;

pub use config::{FareBand, FareConfig, PlannerConfig, TieBreak};
pub use directory::StationDirectory;
pub use error::PlannerError;
pub use fare::TripSummary;
pub use interchange::{InterchangeResolver, pick_pair};
pub use nearest::nearest_station;
pub use path::{LineChoice, PathComposer, RouteDecision, choose_lines};
pub use topology::{Direction, LineTopology, slice_between};
