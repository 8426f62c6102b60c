//! Domain types for the metro path planner.
//!
//! Lines and stations as the planner sees them: read-only records taken
//! from a network snapshot. Line numbers and station positions are
//! newtypes so they cannot be mixed up with database identities.

mod line;
mod station;

pub use line::{Line, LineNo};
pub use station::{Station, StationNo, same_name};
