use crate::constants::OPENWEATHER_BASE_URL;
use crate::error::{AppError, Result, Upstream};
use crate::format::round_half_up;
use crate::models::{Coordinates, WeatherSnapshot};
use crate::services::{read_json, send_checked};
use reqwest::Client;
use serde::Deserialize;

/// Current-weather lookup by coordinate (OpenWeather, metric, Korean text).
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, OPENWEATHER_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        WeatherClient {
            client,
            api_key,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn current(&self, at: &Coordinates) -> Result<WeatherSnapshot> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::ConfigurationMissing("OPENWEATHER_KEY가 필요합니다.".to_string())
        })?;

        tracing::debug!(lat = at.lat, lon = at.lon, "Weather request");

        let request = self.client.get(&self.base_url).query(&[
            ("lat", at.lat.to_string()),
            ("lon", at.lon.to_string()),
            ("appid", api_key.clone()),
            ("units", "metric".to_string()),
            ("lang", "kr".to_string()),
        ]);

        let response = send_checked(request, Upstream::Weather).await?;
        let data: OpenWeatherResponse = read_json(response, Upstream::Weather).await?;

        Ok(data.into_snapshot())
    }
}

// OpenWeather API response types

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    main: OpenWeatherMain,
    #[serde(default)]
    wind: Option<OpenWeatherWind>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherWind {
    #[serde(default)]
    speed: Option<f64>,
}

impl OpenWeatherResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        let description = self
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "-".to_string());

        WeatherSnapshot {
            name: self.name,
            description,
            temp: round_half_up(self.main.temp) as i32,
            feels_like: round_half_up(self.main.feels_like) as i32,
            temp_min: round_half_up(self.main.temp_min) as i32,
            temp_max: round_half_up(self.main.temp_max) as i32,
            humidity: self.main.humidity.round().clamp(0.0, 100.0) as u8,
            wind_speed: self
                .wind
                .and_then(|w| w.speed)
                .filter(|s| s.is_finite())
                .unwrap_or(0.0)
                .max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_mapping_rounds_temperatures() {
        let raw: OpenWeatherResponse = serde_json::from_value(json!({
            "name": "Hwacheon",
            "weather": [{"description": "약한 눈"}],
            "main": {"temp": -6.4, "feels_like": -10.5, "temp_min": -8.2,
                     "temp_max": -2.5, "humidity": 80},
            "wind": {"speed": 7.1}
        }))
        .unwrap();

        let snapshot = raw.into_snapshot();
        assert_eq!(snapshot.description, "약한 눈");
        assert_eq!(snapshot.temp, -6);
        assert_eq!(snapshot.feels_like, -10);
        assert_eq!(snapshot.temp_max, -2);
        assert_eq!(snapshot.humidity, 80);
        assert_eq!(snapshot.wind_speed, 7.1);
    }

    #[test]
    fn test_snapshot_mapping_defaults() {
        let raw: OpenWeatherResponse = serde_json::from_value(json!({
            "main": {"temp": 1.0, "feels_like": 0.0, "temp_min": 0.0, "temp_max": 2.0}
        }))
        .unwrap();

        let snapshot = raw.into_snapshot();
        assert_eq!(snapshot.description, "-");
        assert_eq!(snapshot.wind_speed, 0.0);
    }

    #[tokio::test]
    async fn test_unconfigured_client_does_not_call_out() {
        // Port 9 (discard) would fail the request if it were ever made.
        let client = WeatherClient::with_base_url(
            Client::new(),
            None,
            "http://127.0.0.1:9/weather".to_string(),
        );
        assert!(!client.is_configured());

        let at = Coordinates::new(38.1065, 127.7084).unwrap();
        let result = client.current(&at).await;
        assert!(matches!(result, Err(AppError::ConfigurationMissing(_))));
    }
}
