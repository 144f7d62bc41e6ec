//! Short status badges shown next to the weather and traffic panels.

use crate::constants::{TRAFFIC_MODERATE_MAX_MIN, TRAFFIC_SMOOTH_MAX_MIN};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherBadge {
    pub label: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

/// Checked in order; the first matching keyword wins.
const WEATHER_BADGES: [(&[&str], WeatherBadge); 5] = [
    (
        &["눈"],
        WeatherBadge { label: "눈", icon: "❄️", class: "snow" },
    ),
    (
        &["비", "소나기"],
        WeatherBadge { label: "비", icon: "🌧️", class: "rain" },
    ),
    (
        &["안개", "박무", "연무"],
        WeatherBadge { label: "안개", icon: "🌫️", class: "fog" },
    ),
    (
        &["구름", "흐림"],
        WeatherBadge { label: "흐림", icon: "☁️", class: "cloudy" },
    ),
    (
        &["맑"],
        WeatherBadge { label: "맑음", icon: "☀️", class: "clear" },
    ),
];

const DEFAULT_WEATHER_BADGE: WeatherBadge = WeatherBadge {
    label: "날씨",
    icon: "🌡️",
    class: "default",
};

impl WeatherBadge {
    pub fn classify(description: &str) -> WeatherBadge {
        WEATHER_BADGES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| description.contains(k)))
            .map(|(_, badge)| *badge)
            .unwrap_or(DEFAULT_WEATHER_BADGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficBadge {
    Ok,
    Warn,
    Busy,
    Pending,
}

impl TrafficBadge {
    /// Total over all `f64`: finite durations map to one of three levels,
    /// anything else is still pending.
    pub fn classify(duration_min: f64) -> TrafficBadge {
        if !duration_min.is_finite() {
            TrafficBadge::Pending
        } else if duration_min <= TRAFFIC_SMOOTH_MAX_MIN {
            TrafficBadge::Ok
        } else if duration_min <= TRAFFIC_MODERATE_MAX_MIN {
            TrafficBadge::Warn
        } else {
            TrafficBadge::Busy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficBadge::Ok => "원활",
            TrafficBadge::Warn => "보통",
            TrafficBadge::Busy => "혼잡",
            TrafficBadge::Pending => "확인 중",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TrafficBadge::Ok => "ok",
            TrafficBadge::Warn => "warn",
            TrafficBadge::Busy => "busy",
            TrafficBadge::Pending => "pending",
        }
    }
}
