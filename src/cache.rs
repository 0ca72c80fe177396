//! In-memory caching using moka
//!
//! Distance Matrix calls are billed per element, and riders tend to re-quote
//! the same trip while tweaking seat counts, so route lookups are cached.

use moka::future::Cache;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::pricing::models::{Coordinates, TravelEstimate};

/// Application cache holding route lookups
#[derive(Clone)]
pub struct AppCache {
    /// Route estimates (coordinate pair key -> TravelEstimate)
    pub distances: Cache<String, TravelEstimate>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Routes: 10k entries, 24 hour TTL (road distances rarely change)
            distances: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(24 * 60 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            distances_size: self.distances.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.distances.invalidate_all();
        info!("All caches invalidated");
    }

    /// Generate cache key for a route.
    ///
    /// Coordinates are rounded to 5 decimals (about a meter), so GPS jitter
    /// on the same pickup spot still hits the cache.
    pub fn distance_key(origin: Coordinates, destination: Coordinates) -> String {
        format!(
            "route:{:.5},{:.5}:{:.5},{:.5}",
            origin.lat, origin.lng, destination.lat, destination.lng
        )
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub distances_size: u64,
}
