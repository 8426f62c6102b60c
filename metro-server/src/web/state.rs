//! Application state for the web layer.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheConfig, CachedPathResolver};
use crate::network::{MetroNetwork, NetworkError};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The live network snapshot
    pub network: MetroNetwork,

    /// Cached path resolution over the same network
    pub paths: Arc<CachedPathResolver>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: MetroNetwork, config: PlannerConfig, cache_config: &CacheConfig) -> Self {
        let paths = CachedPathResolver::new(network.clone(), config, cache_config);
        Self {
            network,
            paths: Arc::new(paths),
        }
    }

    /// Planner configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        self.paths.config()
    }

    /// Reload the network from disk and drop cached paths.
    ///
    /// On failure the current network and cache are left untouched.
    pub async fn reload_network(&self, path: impl AsRef<Path>) -> Result<usize, NetworkError> {
        let count = self.network.reload(path).await?;
        debug!(
            entries = self.paths.cache_entry_count(),
            "Dropping cached paths"
        );
        self.paths.invalidate_cache();
        Ok(count)
    }
}
