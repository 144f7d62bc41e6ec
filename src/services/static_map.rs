use crate::config::ClientCredentials;
use crate::constants::*;
use crate::error::{AppError, Result, Upstream};
use crate::models::Coordinates;
use crate::services::directions::NAVER_MAPS_MISSING;
use crate::services::send_checked;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Raster image returned by the static map service.
#[derive(Debug, Clone)]
pub struct MapImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Static map preview framing a start and goal marker.
#[derive(Clone)]
pub struct StaticMapClient {
    client: Client,
    credentials: Option<ClientCredentials>,
    base_url: String,
}

impl StaticMapClient {
    pub fn new(client: Client, credentials: Option<ClientCredentials>) -> Self {
        Self::with_base_url(client, credentials, NAVER_STATIC_MAP_BASE_URL.to_string())
    }

    pub fn with_base_url(
        client: Client,
        credentials: Option<ClientCredentials>,
        base_url: String,
    ) -> Self {
        StaticMapClient {
            client,
            credentials,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Query pairs for the raster request. `level` falls back to the default
    /// zoom when it is not a finite number.
    pub fn query_pairs(
        start: &Coordinates,
        goal: &Coordinates,
        level: f64,
    ) -> Vec<(String, String)> {
        let center = start.midpoint(goal);
        let level = if level.is_finite() {
            level
        } else {
            DEFAULT_MAP_LEVEL as f64
        };

        vec![
            ("w".to_string(), STATIC_MAP_WIDTH.to_string()),
            ("h".to_string(), STATIC_MAP_HEIGHT.to_string()),
            ("center".to_string(), center.lon_lat()),
            ("level".to_string(), level.to_string()),
            (
                "markers".to_string(),
                format!("type:t|size:mid|color:0x1f4b66|pos:{} {}", start.lon, start.lat),
            ),
            (
                "markers".to_string(),
                format!("type:t|size:mid|color:0xb24b34|pos:{} {}", goal.lon, goal.lat),
            ),
        ]
    }

    pub async fn render(
        &self,
        start: &Coordinates,
        goal: &Coordinates,
        level: f64,
    ) -> Result<MapImage> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| AppError::ConfigurationMissing(NAVER_MAPS_MISSING.to_string()))?;

        let request = self
            .client
            .get(&self.base_url)
            .query(&Self::query_pairs(start, goal, level))
            .header("X-NCP-APIGW-API-KEY-ID", &credentials.client_id)
            .header("X-NCP-APIGW-API-KEY", &credentials.client_secret);

        let response = send_checked(request, Upstream::Map).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(Upstream::Map, e))?
            .to_vec();

        tracing::debug!(bytes = bytes.len(), content_type = %content_type, "Static map rendered");

        Ok(MapImage {
            content_type,
            bytes,
        })
    }
}
