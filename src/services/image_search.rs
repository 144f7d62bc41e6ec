use crate::config::ClientCredentials;
use crate::constants::NAVER_IMAGE_SEARCH_BASE_URL;
use crate::error::{Result, Upstream};
use crate::format::strip_markup;
use crate::models::{ImageItem, ImageResponse};
use crate::services::{read_json, send_checked};
use reqwest::Client;
use serde::Deserialize;

/// Image search by keyword (Naver search, similarity order).
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    credentials: Option<ClientCredentials>,
    base_url: String,
}

impl ImageSearchClient {
    pub fn new(client: Client, credentials: Option<ClientCredentials>) -> Self {
        Self::with_base_url(client, credentials, NAVER_IMAGE_SEARCH_BASE_URL.to_string())
    }

    pub fn with_base_url(
        client: Client,
        credentials: Option<ClientCredentials>,
        base_url: String,
    ) -> Self {
        ImageSearchClient {
            client,
            credentials,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Without credentials this returns the fixed fallback gallery.
    pub async fn search(&self, query: &str, display: u32) -> Result<ImageResponse> {
        let Some(credentials) = self.credentials.as_ref() else {
            return Ok(ImageResponse::unconfigured());
        };

        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("query", query.to_string()),
                ("display", display.to_string()),
                ("sort", "sim".to_string()),
            ])
            .header("X-Naver-Client-Id", &credentials.client_id)
            .header("X-Naver-Client-Secret", &credentials.client_secret);

        let response = send_checked(request, Upstream::Images).await?;
        let data: ImageSearchResponse = read_json(response, Upstream::Images).await?;

        let items: Vec<ImageItem> = data
            .items
            .into_iter()
            .map(|item| ImageItem {
                image: item.link,
                thumbnail: item.thumbnail,
                title: strip_markup(&item.title),
            })
            .collect();

        tracing::debug!(
            query = %query,
            count = items.len(),
            "Image search returned {} items",
            items.len()
        );

        Ok(ImageResponse { items, note: None })
    }
}

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    #[serde(default)]
    items: Vec<ImageSearchItem>,
}

#[derive(Debug, Deserialize)]
struct ImageSearchItem {
    #[serde(default)]
    link: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    title: String,
}
