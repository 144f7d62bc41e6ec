use crate::cache;
use crate::constants::{DEFAULT_IMAGE_DISPLAY, DEFAULT_MEDIA_QUERY};
use crate::error::Result;
use crate::format::nonzero_number;
use crate::models::ImageResponse;
use crate::routes::cached;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Naver caps image search at 100 results.
const MAX_IMAGE_DISPLAY: f64 = 100.0;

#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    pub query: Option<String>,
    pub display: Option<String>,
}

impl ImageQuery {
    pub fn query_text(&self) -> &str {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_MEDIA_QUERY)
    }

    pub fn display(&self) -> u32 {
        nonzero_number(self.display.as_deref(), DEFAULT_IMAGE_DISPLAY as f64)
            .clamp(1.0, MAX_IMAGE_DISPLAY) as u32
    }
}

/// GET /images
pub async fn search_images(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageQuery>,
) -> Result<Json<ImageResponse>> {
    let text = query.query_text();
    let count = query.display();
    tracing::info!(query = %text, display = count, "Image search request");

    let key = cache::query_cache_key("images", text, count);
    let images = cached(
        &state,
        &key,
        |images: &ImageResponse| images.note.is_none(),
        || state.images.search(text, count),
    )
    .await?;

    Ok(Json(images))
}
