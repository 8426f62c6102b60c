//! The read contract between the planner and network storage.

use std::future::Future;

use crate::domain::{LineNo, Station};

use super::error::NetworkError;

/// Trait for providing line and station records.
///
/// This abstraction lets the planner run against an in-memory snapshot, a
/// database, or a test fixture. Implementations must be safe for concurrent
/// reads; the planner never writes.
pub trait NetworkSource: Send + Sync {
    /// All stations owned by `line`, in no particular order.
    ///
    /// An unknown line or a line with no stations yields an empty list.
    fn stations_for_line(
        &self,
        line: LineNo,
    ) -> impl Future<Output = Result<Vec<Station>, NetworkError>> + Send;

    /// All stations whose name matches `name`, ignoring case.
    ///
    /// An interchange name yields one record per connected line.
    fn find_stations_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Station>, NetworkError>> + Send;
}
