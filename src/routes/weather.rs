use crate::cache;
use crate::constants::{DEFAULT_VENUE_LAT, DEFAULT_VENUE_LON};
use crate::error::{AppError, Result};
use crate::format::get_number;
use crate::models::{Coordinates, WeatherSnapshot};
use crate::routes::cached;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for coordinate lookups; unparseable values fall back to the venue.
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordinateQuery {
    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(
            get_number(self.lat.as_deref(), DEFAULT_VENUE_LAT),
            get_number(self.lon.as_deref(), DEFAULT_VENUE_LON),
        )
        .map_err(AppError::InvalidRequest)
    }
}

/// GET /weather
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<WeatherSnapshot>> {
    let at = query.coordinates()?;
    tracing::info!(lat = at.lat, lon = at.lon, "Weather request");

    let key = cache::coordinate_cache_key("weather", &[at]);
    let snapshot = cached(&state, &key, |_| true, || state.weather.current(&at)).await?;

    Ok(Json(snapshot))
}
