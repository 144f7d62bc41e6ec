use crate::cache;
use crate::constants::*;
use crate::error::{AppError, Result};
use crate::format::get_number;
use crate::models::{Coordinates, TrafficSnapshot};
use crate::routes::cached;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Start/goal pair; missing values default to Seoul and the venue.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    pub start_lat: Option<String>,
    pub start_lon: Option<String>,
    pub goal_lat: Option<String>,
    pub goal_lon: Option<String>,
}

impl RouteQuery {
    pub fn endpoints(&self) -> Result<(Coordinates, Coordinates)> {
        let start = Coordinates::new(
            get_number(self.start_lat.as_deref(), DEFAULT_ORIGIN_LAT),
            get_number(self.start_lon.as_deref(), DEFAULT_ORIGIN_LON),
        )
        .map_err(AppError::InvalidRequest)?;
        let goal = Coordinates::new(
            get_number(self.goal_lat.as_deref(), DEFAULT_VENUE_LAT),
            get_number(self.goal_lon.as_deref(), DEFAULT_VENUE_LON),
        )
        .map_err(AppError::InvalidRequest)?;
        Ok((start, goal))
    }
}

/// GET /traffic
pub async fn driving_estimate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<TrafficSnapshot>> {
    let (start, goal) = query.endpoints()?;
    tracing::info!(
        start = %start.lon_lat(),
        goal = %goal.lon_lat(),
        "Traffic request"
    );

    let key = cache::coordinate_cache_key("traffic", &[start, goal]);
    let snapshot = cached(&state, &key, |_| true, || {
        state.directions.driving(&start, &goal)
    })
    .await?;

    Ok(Json(snapshot))
}
