use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::cache::CacheConfig;
use metro_server::network::MetroNetwork;
use metro_server::planner::PlannerConfig;
use metro_server::web::{AppState, create_router};

const DEFAULT_NETWORK_FILE: &str = "data/network.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let network_file = PathBuf::from(
        std::env::var("METRO_NETWORK_FILE").unwrap_or_else(|_| DEFAULT_NETWORK_FILE.to_string()),
    );
    let bind_addr =
        std::env::var("METRO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = match bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(%bind_addr, "Invalid METRO_BIND_ADDR: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the network (fail fast if unavailable)
    let network = match MetroNetwork::load(&network_file) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %network_file.display(), "Failed to load network: {e}");
            return ExitCode::FAILURE;
        }
    };
    let snapshot = network.snapshot().await;
    info!(
        path = %network_file.display(),
        lines = snapshot.lines().len(),
        stations = snapshot.station_count(),
        "Loaded network"
    );

    let state = AppState::new(network, PlannerConfig::default(), &CacheConfig::default());

    // Periodically reload the network file if asked to
    match std::env::var("METRO_RELOAD_SECS").ok().map(|s| s.parse::<u64>()) {
        Some(Ok(secs)) if secs > 0 => {
            let reload_state = state.clone();
            let reload_path = network_file.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(secs));
                interval.tick().await; // First tick is immediate, skip it
                loop {
                    interval.tick().await;
                    if let Err(e) = reload_state.reload_network(&reload_path).await {
                        error!("Failed to reload network: {e}");
                    }
                }
            });
            info!(secs, "Reloading network periodically");
        }
        Some(Ok(_)) | None => {}
        Some(Err(e)) => {
            error!("Invalid METRO_RELOAD_SECS: {e}");
            return ExitCode::FAILURE;
        }
    }

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Metro path planner listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
