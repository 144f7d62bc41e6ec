use crate::constants::*;
use crate::error::{AppError, Result};
use crate::format::{get_number, nonzero_number};
use crate::models::Coordinates;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQuery {
    pub start_lat: Option<String>,
    pub start_lon: Option<String>,
    pub goal_lat: Option<String>,
    pub goal_lon: Option<String>,
    pub level: Option<String>,
}

impl MapQuery {
    /// Zero and unparseable coordinates both fall back to the defaults.
    pub fn endpoints(&self) -> Result<(Coordinates, Coordinates)> {
        let start = Coordinates::new(
            nonzero_number(self.start_lat.as_deref(), DEFAULT_ORIGIN_LAT),
            nonzero_number(self.start_lon.as_deref(), DEFAULT_ORIGIN_LON),
        )
        .map_err(AppError::InvalidRequest)?;
        let goal = Coordinates::new(
            nonzero_number(self.goal_lat.as_deref(), DEFAULT_VENUE_LAT),
            nonzero_number(self.goal_lon.as_deref(), DEFAULT_VENUE_LON),
        )
        .map_err(AppError::InvalidRequest)?;
        Ok((start, goal))
    }

    /// NaN when absent; the map client substitutes its default zoom.
    pub fn level(&self) -> f64 {
        get_number(self.level.as_deref(), f64::NAN)
    }
}

/// GET /map
/// Proxies the static map image, passing the upstream content type through.
pub async fn static_map(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Response> {
    let (start, goal) = query.endpoints()?;
    let image = state.static_map.render(&start, &goal, query.level()).await?;

    Ok(([(CONTENT_TYPE, image.content_type)], image.bytes).into_response())
}
