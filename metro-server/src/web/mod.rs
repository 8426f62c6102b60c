//! Web layer for the metro path planner.
//!
//! Read-only HTTP endpoints for paths, distances and station lookups.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
