use crate::config::ClientCredentials;
use crate::constants::NAVER_DIRECTIONS_BASE_URL;
use crate::error::{AppError, Result, Upstream};
use crate::format::{meters_to_km, seconds_to_minutes};
use crate::models::traffic::FASTEST_ROUTE_SUMMARY;
use crate::models::{Coordinates, TrafficSnapshot};
use crate::services::{read_json, send_checked};
use reqwest::Client;
use serde::Deserialize;

pub(crate) const NAVER_MAPS_MISSING: &str = "NAVER_MAPS_CLIENT_ID/SECRET가 필요합니다.";

/// Driving ETA between two points using the fastest-route option.
#[derive(Clone)]
pub struct DirectionsClient {
    client: Client,
    credentials: Option<ClientCredentials>,
    base_url: String,
}

impl DirectionsClient {
    pub fn new(client: Client, credentials: Option<ClientCredentials>) -> Self {
        Self::with_base_url(client, credentials, NAVER_DIRECTIONS_BASE_URL.to_string())
    }

    pub fn with_base_url(
        client: Client,
        credentials: Option<ClientCredentials>,
        base_url: String,
    ) -> Self {
        DirectionsClient {
            client,
            credentials,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub async fn driving(
        &self,
        start: &Coordinates,
        goal: &Coordinates,
    ) -> Result<TrafficSnapshot> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| AppError::ConfigurationMissing(NAVER_MAPS_MISSING.to_string()))?;

        tracing::debug!(
            start = %start.lon_lat(),
            goal = %goal.lon_lat(),
            "Directions request {} -> {}",
            start.lon_lat(), goal.lon_lat()
        );

        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("start", start.lon_lat()),
                ("goal", goal.lon_lat()),
                ("option", "trafast".to_string()),
            ])
            .header("X-NCP-APIGW-API-KEY-ID", &credentials.client_id)
            .header("X-NCP-APIGW-API-KEY", &credentials.client_secret);

        let response = send_checked(request, Upstream::Traffic).await?;
        let data: DirectionsApiResponse = read_json(response, Upstream::Traffic).await?;

        let summary = data
            .route
            .and_then(|r| r.trafast.into_iter().next())
            .and_then(|option| option.summary)
            .ok_or_else(|| {
                tracing::warn!("Directions response contained no trafast summary");
                AppError::empty_response(Upstream::Traffic)
            })?;

        let snapshot = TrafficSnapshot {
            duration_min: seconds_to_minutes(summary.duration),
            distance_km: meters_to_km(summary.distance),
            summary: FASTEST_ROUTE_SUMMARY.to_string(),
        };
        tracing::debug!(
            duration_min = snapshot.duration_min,
            distance_km = snapshot.distance_km,
            "Directions response: {}min, {}km",
            snapshot.duration_min, snapshot.distance_km
        );
        Ok(snapshot)
    }
}

// Naver directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    #[serde(default)]
    route: Option<DirectionsRouteSet>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRouteSet {
    #[serde(default)]
    trafast: Vec<DirectionsRouteOption>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRouteOption {
    #[serde(default)]
    summary: Option<DirectionsSummary>,
}

#[derive(Debug, Deserialize)]
struct DirectionsSummary {
    /// seconds
    duration: f64,
    /// meters
    distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_naver_endpoint() {
        let client = DirectionsClient::new(Client::new(), None);
        assert_eq!(client.base_url, NAVER_DIRECTIONS_BASE_URL);
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = DirectionsClient::new(Client::new(), None);
        let start = Coordinates::new(37.5278, 127.0285).unwrap();
        let goal = Coordinates::new(38.1065, 127.7084).unwrap();

        match client.driving(&start, &goal).await {
            Err(AppError::ConfigurationMissing(message)) => {
                assert_eq!(message, NAVER_MAPS_MISSING)
            }
            other => panic!("expected ConfigurationMissing, got {:?}", other),
        }
    }
}
