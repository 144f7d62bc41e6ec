// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;
pub mod page;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use cache::ResponseCache;
use config::Config;
use reqwest::Client;
use services::directions::DirectionsClient;
use services::image_search::ImageSearchClient;
use services::place_search::PlaceSearchClient;
use services::static_map::StaticMapClient;
use services::video_search::VideoSearchClient;
use services::weather::WeatherClient;
use std::sync::Arc;
use std::time::Duration;

// App state for sharing across the application
pub struct AppState {
    pub weather: WeatherClient,
    pub directions: DirectionsClient,
    pub static_map: StaticMapClient,
    pub places: PlaceSearchClient,
    pub images: ImageSearchClient,
    pub videos: VideoSearchClient,
    pub cache: Option<Arc<dyn ResponseCache>>,
}

impl AppState {
    /// Build every upstream client over one shared connection pool.
    pub fn from_config(
        config: &Config,
        cache: Option<Arc<dyn ResponseCache>>,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        let endpoints = &config.endpoints;

        Ok(AppState {
            weather: WeatherClient::with_base_url(
                client.clone(),
                config.openweather_key.clone(),
                endpoints.weather.clone(),
            ),
            directions: DirectionsClient::with_base_url(
                client.clone(),
                config.naver_maps.clone(),
                endpoints.directions.clone(),
            ),
            static_map: StaticMapClient::with_base_url(
                client.clone(),
                config.naver_maps.clone(),
                endpoints.static_map.clone(),
            ),
            places: PlaceSearchClient::with_base_url(
                client.clone(),
                config.kakao_rest_key.clone(),
                endpoints.place_search.clone(),
            ),
            images: ImageSearchClient::with_base_url(
                client.clone(),
                config.naver_search.clone(),
                endpoints.image_search.clone(),
            ),
            videos: VideoSearchClient::with_base_url(
                client,
                config.youtube_key.clone(),
                endpoints.video_search.clone(),
            ),
            cache,
        })
    }
}
