//! Caching layer for resolved paths.
//!
//! Resolving a path takes several lookups against the network plus a sort
//! per line segment. Results only change when the network is reloaded, so
//! they are memoised by snapshot generation and (from, to) name pair. Names
//! are lower-cased to match the planner's case-insensitive name policy.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Station;
use crate::network::{MetroNetwork, NetworkSnapshot};
use crate::planner::{PathComposer, PlannerConfig, PlannerError};

/// Cache key for paths: snapshot generation and lower-cased (from, to).
type PathKey = (u64, String, String);

/// Cached path entry.
type PathEntry = Arc<Vec<Station>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of resolved paths.
pub struct PathCache {
    paths: MokaCache<PathKey, PathEntry>,
}

impl PathCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let paths = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { paths }
    }

    fn key(generation: u64, from: &str, to: &str) -> PathKey {
        (generation, from.to_lowercase(), to.to_lowercase())
    }

    /// Get a path cached for snapshot `generation`.
    pub async fn get(&self, generation: u64, from: &str, to: &str) -> Option<PathEntry> {
        self.paths.get(&Self::key(generation, from, to)).await
    }

    /// Insert a path computed from snapshot `generation`.
    pub async fn insert(&self, generation: u64, from: &str, to: &str, entry: PathEntry) {
        self.paths
            .insert(Self::key(generation, from, to), entry)
            .await;
    }

    /// Approximate number of cached entries.
    pub fn entry_count(&self) -> u64 {
        self.paths.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.paths.invalidate_all();
    }
}

/// Path resolution with caching.
///
/// Every resolution runs against a single network snapshot. Failures
/// (unknown stations, no interchange) are never cached, and neither is a
/// result whose snapshot was replaced while it was being computed.
pub struct CachedPathResolver {
    network: MetroNetwork,
    config: PlannerConfig,
    cache: PathCache,
}

impl CachedPathResolver {
    /// Create a new cached resolver.
    pub fn new(network: MetroNetwork, config: PlannerConfig, cache_config: &CacheConfig) -> Self {
        Self {
            network,
            config,
            cache: PathCache::new(cache_config),
        }
    }

    /// Resolve a path on the current snapshot, using the cache if available.
    pub async fn resolve_path(&self, from: &str, to: &str) -> Result<PathEntry, PlannerError> {
        let snapshot = self.network.snapshot().await;
        self.resolve_on(&snapshot, from, to).await
    }

    /// Resolve a path on `snapshot`, using the cache if available.
    pub async fn resolve_on(
        &self,
        snapshot: &NetworkSnapshot,
        from: &str,
        to: &str,
    ) -> Result<PathEntry, PlannerError> {
        let generation = snapshot.generation();
        if let Some(cached) = self.cache.get(generation, from, to).await {
            trace!(from, to, generation, "Path cache hit");
            return Ok(cached);
        }

        let path = PathComposer::new(snapshot, &self.config)
            .resolve_path(from, to)
            .await?;
        let entry = Arc::new(path);

        if self.network.snapshot().await.generation() == generation {
            self.cache.insert(generation, from, to, entry.clone()).await;
        } else {
            trace!(from, to, generation, "Network reloaded, not caching path");
        }

        Ok(entry)
    }

    /// Planner configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Approximate number of cached paths.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
