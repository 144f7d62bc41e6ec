pub mod memory;

pub use memory::MemoryCacheService;

use crate::models::Coordinates;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub entries: u64,
}

/// Store for successful upstream JSON payloads, keyed by request shape.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;
    async fn put(&self, key: &str, value: Value);
    async fn get_stats(&self) -> CacheStats;
    fn backend_name(&self) -> &'static str;
}

/// Cache key for a coordinate-based lookup.
/// Coordinates are rounded to 3 decimal places (~100m precision).
pub fn coordinate_cache_key(endpoint: &str, points: &[Coordinates]) -> String {
    let mut hasher = DefaultHasher::new();
    for point in points {
        ((point.lat * 1000.0).round() as i64).hash(&mut hasher);
        ((point.lon * 1000.0).round() as i64).hash(&mut hasher);
    }
    format!("{}:{:x}", endpoint, hasher.finish())
}

/// Cache key for a free-text search with a result limit.
/// The query is hashed exactly as it is sent upstream.
pub fn query_cache_key(endpoint: &str, query: &str, limit: u32) -> String {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    limit.hash(&mut hasher);
    format!("{}:{:x}", endpoint, hasher.finish())
}
