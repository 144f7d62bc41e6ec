use crate::constants::*;
use crate::error::{Result, Upstream};
use crate::format::{number_from_value, place_distance_km, strip_markup};
use crate::models::{Coordinates, FoodResponse, PlaceResult};
use crate::services::{read_json, send_checked};
use reqwest::Client;
use serde::Deserialize;

/// Keyword place search around a point (Kakao Local).
#[derive(Clone)]
pub struct PlaceSearchClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PlaceSearchClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, KAKAO_KEYWORD_SEARCH_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        PlaceSearchClient {
            client,
            api_key,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Rest areas and restaurants near `at`, searched concurrently.
    /// Without a key this returns the empty, annotated payload.
    pub async fn nearby_food(&self, at: &Coordinates) -> Result<FoodResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(FoodResponse::unconfigured());
        };

        let (rest_areas, restaurants) = futures::try_join!(
            self.search(api_key, REST_AREA_KEYWORD, at),
            self.search(api_key, RESTAURANT_KEYWORD, at),
        )?;

        tracing::debug!(
            rest_areas = rest_areas.len(),
            restaurants = restaurants.len(),
            "Place search: {} rest areas, {} restaurants",
            rest_areas.len(), restaurants.len()
        );

        Ok(FoodResponse {
            rest_areas,
            restaurants,
            note: None,
        })
    }

    async fn search(
        &self,
        api_key: &str,
        query: &str,
        at: &Coordinates,
    ) -> Result<Vec<PlaceResult>> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("query", query.to_string()),
                ("x", at.lon.to_string()),
                ("y", at.lat.to_string()),
                ("radius", PLACE_SEARCH_RADIUS_METERS.to_string()),
                ("size", PLACE_SEARCH_SIZE.to_string()),
            ])
            .header("Authorization", format!("KakaoAK {}", api_key));

        let response = send_checked(request, Upstream::Places).await?;
        let data: KeywordSearchResponse = read_json(response, Upstream::Places).await?;

        Ok(data.documents.into_iter().map(PlaceDocument::into_place).collect())
    }
}

// Kakao keyword search response types

#[derive(Debug, Deserialize)]
struct KeywordSearchResponse {
    #[serde(default)]
    documents: Vec<PlaceDocument>,
}

#[derive(Debug, Deserialize)]
struct PlaceDocument {
    #[serde(default)]
    place_name: String,
    /// Meters from the search center; Kakao sends it as a string.
    #[serde(default)]
    distance: Option<serde_json::Value>,
    #[serde(default)]
    road_address_name: String,
    #[serde(default)]
    address_name: String,
}

impl PlaceDocument {
    fn into_place(self) -> PlaceResult {
        let address = if self.road_address_name.is_empty() {
            self.address_name
        } else {
            self.road_address_name
        };

        PlaceResult {
            name: strip_markup(&self.place_name),
            distance_km: place_distance_km(
                number_from_value(self.distance.as_ref()).unwrap_or(0.0),
            ),
            address: strip_markup(&address),
        }
    }
}
