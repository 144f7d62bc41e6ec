use crate::cache;
use crate::error::Result;
use crate::models::FoodResponse;
use crate::routes::cached;
use crate::routes::weather::CoordinateQuery;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// GET /food
/// Rest areas and restaurants around the given point.
pub async fn nearby_food(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<FoodResponse>> {
    let at = query.coordinates()?;
    tracing::info!(lat = at.lat, lon = at.lon, "Food request");

    let key = cache::coordinate_cache_key("food", &[at]);
    let food = cached(
        &state,
        &key,
        |food: &FoodResponse| food.note.is_none(),
        || state.places.nearby_food(&at),
    )
    .await?;

    Ok(Json(food))
}
