use crate::cache;
use crate::constants::{DEFAULT_MEDIA_QUERY, DEFAULT_VIDEO_MAX_RESULTS};
use crate::error::Result;
use crate::format::nonzero_number;
use crate::models::VideoResponse;
use crate::routes::cached;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// YouTube search accepts at most 50 results per page.
const MAX_VIDEO_RESULTS: f64 = 50.0;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoQuery {
    pub query: Option<String>,
    pub max_results: Option<String>,
}

impl VideoQuery {
    pub fn query_text(&self) -> &str {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_MEDIA_QUERY)
    }

    pub fn max_results(&self) -> u32 {
        nonzero_number(self.max_results.as_deref(), DEFAULT_VIDEO_MAX_RESULTS as f64)
            .clamp(1.0, MAX_VIDEO_RESULTS) as u32
    }
}

/// GET /youtube
pub async fn search_videos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VideoQuery>,
) -> Result<Json<VideoResponse>> {
    let text = query.query_text();
    let max_results = query.max_results();
    tracing::info!(query = %text, max_results, "Video search request");

    let key = cache::query_cache_key("youtube", text, max_results);
    let videos = cached(
        &state,
        &key,
        |videos: &VideoResponse| videos.note.is_none(),
        || state.videos.search(text, max_results),
    )
    .await?;

    Ok(Json(videos))
}
