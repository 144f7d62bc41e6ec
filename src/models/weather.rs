use serde::{Deserialize, Serialize};

/// Current conditions at one location, already rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub name: String,
    pub description: String,
    pub temp: i32,
    pub feels_like: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    /// Relative humidity, 0-100.
    pub humidity: u8,
    /// m/s, never negative.
    #[serde(default)]
    pub wind_speed: f64,
}
