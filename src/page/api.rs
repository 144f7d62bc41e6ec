//! Client side of the `/api/*` endpoints.

use crate::models::{
    Coordinates, FoodResponse, ImageResponse, TrafficSnapshot, VideoResponse, WeatherSnapshot,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    #[error("요청 실패: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for PageError {
    fn from(err: reqwest::Error) -> Self {
        PageError::Transport(err.to_string())
    }
}

/// Body shape of an `/api/*` error response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// Everything the page fetches. One call per region.
#[async_trait]
pub trait FestivalApi: Send + Sync {
    async fn weather(&self, at: Coordinates) -> Result<WeatherSnapshot, PageError>;
    async fn traffic(
        &self,
        start: Coordinates,
        goal: Coordinates,
    ) -> Result<TrafficSnapshot, PageError>;
    async fn food(&self, at: Coordinates) -> Result<FoodResponse, PageError>;
    async fn images(&self, query: &str, display: u32) -> Result<ImageResponse, PageError>;
    async fn videos(&self, query: &str, max_results: u32) -> Result<VideoResponse, PageError>;
}

/// `/api/map` URL for an image framing `start` and `goal` at `level`.
pub fn map_preview_url(api_base: &str, start: Coordinates, goal: Coordinates, level: u8) -> String {
    format!(
        "{}/api/map?startLat={}&startLon={}&goalLat={}&goalLon={}&level={}",
        api_base.trim_end_matches('/'),
        start.lat,
        start.lon,
        goal.lat,
        goal.lon,
        level
    )
}

/// Talks to a running festguide server.
#[derive(Clone)]
pub struct HttpFestivalApi {
    client: Client,
    base_url: String,
}

impl HttpFestivalApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpFestivalApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, PageError> {
        let url = format!("{}/api/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.ok();
            let (message, detail) = match body {
                Some(body) => (body.message, body.detail),
                None => (None, None),
            };
            return Err(PageError::Http {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl FestivalApi for HttpFestivalApi {
    async fn weather(&self, at: Coordinates) -> Result<WeatherSnapshot, PageError> {
        self.get(
            "weather",
            &[("lat", at.lat.to_string()), ("lon", at.lon.to_string())],
        )
        .await
    }

    async fn traffic(
        &self,
        start: Coordinates,
        goal: Coordinates,
    ) -> Result<TrafficSnapshot, PageError> {
        self.get(
            "traffic",
            &[
                ("startLat", start.lat.to_string()),
                ("startLon", start.lon.to_string()),
                ("goalLat", goal.lat.to_string()),
                ("goalLon", goal.lon.to_string()),
            ],
        )
        .await
    }

    async fn food(&self, at: Coordinates) -> Result<FoodResponse, PageError> {
        self.get(
            "food",
            &[("lat", at.lat.to_string()), ("lon", at.lon.to_string())],
        )
        .await
    }

    async fn images(&self, query: &str, display: u32) -> Result<ImageResponse, PageError> {
        self.get(
            "images",
            &[("query", query.to_string()), ("display", display.to_string())],
        )
        .await
    }

    async fn videos(&self, query: &str, max_results: u32) -> Result<VideoResponse, PageError> {
        self.get(
            "youtube",
            &[
                ("query", query.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preview_url() {
        let seoul = Coordinates::new(37.5278, 127.0285).unwrap();
        let venue = Coordinates::new(38.1065, 127.7084).unwrap();
        assert_eq!(
            map_preview_url("http://localhost:3000/", seoul, venue, 9),
            "http://localhost:3000/api/map?startLat=37.5278&startLon=127.0285&goalLat=38.1065&goalLon=127.7084&level=9"
        );
    }

    #[test]
    fn test_http_error_displays_server_message() {
        let err = PageError::Http {
            status: 502,
            message: "교통 API 호출 실패".to_string(),
            detail: Some("quota".to_string()),
        };
        assert_eq!(err.to_string(), "교통 API 호출 실패");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpFestivalApi::new(Client::new(), "http://127.0.0.1:3000/");
        assert_eq!(api.base_url(), "http://127.0.0.1:3000");
    }
}
