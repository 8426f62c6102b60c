//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::LineNo;
use crate::geo::haversine_km;
use crate::network::NetworkError;
use crate::planner::{
    Direction, LineTopology, PlannerError, StationDirectory, TripSummary, nearest_station,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:number/stations", get(line_stations))
        .route("/api/stations/lines", get(station_lines))
        .route("/api/stations/nearest", post(nearest))
        .route("/api/path", get(find_path))
        .route("/api/distance", get(distance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All lines with their station counts.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineSummary>> {
    let network = state.network.snapshot().await;
    Json(network.lines().iter().map(LineSummary::from_line).collect())
}

/// Stations of one line in ascending travel order.
async fn line_stations(
    State(state): State<AppState>,
    Path(number): Path<u32>,
) -> Result<Json<LineStationsResponse>, AppError> {
    let network = state.network.snapshot().await;
    let line = network
        .line(LineNo(number))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Line {number} not found"),
        })?;

    let stations = LineTopology::new(network.as_ref())
        .ordered_stations(line.number, Direction::Ascending)
        .await?;

    Ok(Json(LineStationsResponse {
        number: line.number.0,
        name: line.name.clone(),
        stations: stations.iter().map(StationResult::from_station).collect(),
    }))
}

/// Lines serving a named station.
async fn station_lines(
    State(state): State<AppState>,
    Query(req): Query<StationLinesRequest>,
) -> Result<Json<StationLinesResponse>, AppError> {
    let station = req.station.trim();
    if station.is_empty() {
        return Err(AppError::BadRequest {
            message: "Station name is required".to_string(),
        });
    }

    let network = state.network.snapshot().await;
    let lines = StationDirectory::new(network.as_ref(), state.config().tie_break)
        .distinct_line_numbers_for_name(station)
        .await?;

    if lines.is_empty() {
        return Err(AppError::NotFound {
            message: format!("Station {station} was not found on any line"),
        });
    }

    Ok(Json(StationLinesResponse {
        station: station.to_string(),
        lines: lines.iter().map(|l| l.0).collect(),
    }))
}

/// Path, fare and travel time between two named stations.
async fn find_path(
    State(state): State<AppState>,
    Query(req): Query<PathRequest>,
) -> Result<Json<PathResponse>, AppError> {
    let (from, to) = (req.from.trim(), req.to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest {
            message: "Both from and to stations are required".to_string(),
        });
    }

    let path = state.paths.resolve_path(from, to).await?;
    let summary = TripSummary::from_path(&path, &state.config().fares);

    Ok(Json(PathResponse::new(summary, &path)))
}

/// Great-circle distance between two points.
async fn distance(Query(req): Query<DistanceRequest>) -> Result<Json<DistanceResponse>, AppError> {
    for (lat, lon) in [(req.lat1, req.lon1), (req.lat2, req.lon2)] {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::BadRequest {
                message: format!("Coordinates out of range: ({lat}, {lon})"),
            });
        }
    }

    Ok(Json(DistanceResponse {
        km: haversine_km(req.lat1, req.lon1, req.lat2, req.lon2),
    }))
}

/// The station closest to a location.
async fn nearest(
    State(state): State<AppState>,
    Json(req): Json<NearestRequest>,
) -> Result<Json<NearestResponse>, AppError> {
    let network = state.network.snapshot().await;
    let (station, distance_km) =
        nearest_station(req.latitude, req.longitude, network.all_stations())?;

    Ok(Json(NearestResponse {
        name: station.name.clone(),
        line: station.line.0,
        distance_km,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::UnknownStation { .. } | PlannerError::NoInterchange { .. } => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            PlannerError::EmptyCandidateSet => AppError::NotFound {
                message: "The network has no stations".to_string(),
            },
            PlannerError::Source(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
