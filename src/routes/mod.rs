pub mod food;
pub mod health;
pub mod images;
pub mod map;
pub mod traffic;
pub mod weather;
pub mod youtube;

use axum::{routing::get, Router};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/weather", get(weather::current_weather))
        .route("/traffic", get(traffic::driving_estimate))
        .route("/food", get(food::nearby_food))
        .route("/images", get(images::search_images))
        .route("/youtube", get(youtube::search_videos))
        .route("/map", get(map::static_map))
        .route("/health", get(health::health_check))
        .with_state(state)
}

/// Serve from the response cache when possible; otherwise fetch and store
/// the result if `cacheable` accepts it.
pub(crate) async fn cached<T, F, Fut>(
    state: &AppState,
    key: &str,
    cacheable: impl Fn(&T) -> bool,
    fetch: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(ref cache) = state.cache {
        if let Some(value) = cache.get(key).await {
            match serde_json::from_value(value) {
                Ok(hit) => return Ok(hit),
                Err(e) => tracing::warn!("Discarding unreadable cache entry {}: {}", key, e),
            }
        }
    }

    let fresh = fetch().await?;

    if let Some(ref cache) = state.cache {
        if cacheable(&fresh) {
            match serde_json::to_value(&fresh) {
                Ok(value) => cache.put(key, value).await,
                Err(e) => tracing::warn!("Failed to serialize response for cache: {}", e),
            }
        }
    }

    Ok(fresh)
}
