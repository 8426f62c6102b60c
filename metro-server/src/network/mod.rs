//! Network data: the read-only collaborator the planner queries.
//!
//! The planner only ever asks two questions of the network: which stations
//! belong to a line, and which stations carry a given name. `NetworkSource`
//! captures that contract; `NetworkSnapshot` answers it from memory and
//! `MetroNetwork` makes a snapshot shareable and reloadable.

mod convert;
mod error;
mod file;
mod snapshot;
mod source;

pub use convert::convert_network;
pub use error::NetworkError;
pub use file::{LineRecord, NetworkFile, StationRecord};
pub use snapshot::{MetroNetwork, NetworkSnapshot};
pub use source::NetworkSource;
