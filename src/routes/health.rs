use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Report which upstreams have credentials and how the cache is doing
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "upstreams": {
            "weather": state.weather.is_configured(),
            "traffic": state.directions.is_configured(),
            "map": state.static_map.is_configured(),
            "food": state.places.is_configured(),
            "images": state.images.is_configured(),
            "youtube": state.videos.is_configured(),
        },
        "cache": null,
    });

    if let Some(ref cache) = state.cache {
        let stats = cache.get_stats().await;
        status["cache"] = json!({
            "backend": cache.backend_name(),
            "hits": stats.hits,
            "misses": stats.misses,
            "hit_rate": stats.hit_rate,
            "entries": stats.entries,
        });
    }

    Json(status)
}
