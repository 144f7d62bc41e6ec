//! Advisory lines derived from the latest weather and traffic snapshots.

use crate::constants::*;
use crate::models::{TrafficSnapshot, WeatherSnapshot};
use serde::Serialize;

pub const DEFAULT_HEADLINE: &str = "축제 여행 팁";

pub const TIP_EXTREME_COLD: &str = "체감 온도가 매우 낮아요. 핫팩과 방한 장갑을 꼭 챙기세요.";
pub const TIP_COLD: &str = "기온이 낮아요. 겹쳐 입기와 모자를 준비하세요.";
pub const TIP_SNOW: &str = "눈 소식이 있어요. 미끄럼 방지 신발을 신으세요.";
pub const TIP_WIND: &str = "바람이 강해요. 방풍 외투로 체온을 지키세요.";
pub const TIP_DEPART_EARLY: &str = "도로가 혼잡해요. 평소보다 일찍 출발하세요.";
pub const TIP_RELAXED: &str = "교통이 원활해요. 여유 있게 출발해도 좋아요.";

pub const GENERIC_TIPS: [&str; 3] = [
    "따뜻한 옷차림을 준비하세요.",
    "얼음낚시는 오전 시간대가 여유로워요.",
    "축제장 주변 주차장은 일찍 마감돼요.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyTips {
    pub headline: String,
    pub tips: Vec<String>,
}

/// Pure function of its inputs.
///
/// The cold rules are exclusive (the colder one wins); snow, wind and
/// traffic rules each fire independently.
pub fn journey_tips(
    weather: Option<&WeatherSnapshot>,
    traffic: Option<&TrafficSnapshot>,
) -> JourneyTips {
    let mut tips: Vec<&str> = Vec::new();

    if let Some(weather) = weather {
        if weather.temp <= EXTREME_COLD_MAX_C {
            tips.push(TIP_EXTREME_COLD);
        } else if weather.temp <= COLD_MAX_C {
            tips.push(TIP_COLD);
        }
        if weather.description.contains(SNOW_INDICATOR) {
            tips.push(TIP_SNOW);
        }
        if weather.wind_speed >= STRONG_WIND_MIN_MS {
            tips.push(TIP_WIND);
        }
    }

    if let Some(traffic) = traffic {
        let minutes = traffic.duration_min as f64;
        if minutes >= TRAFFIC_MODERATE_MAX_MIN {
            tips.push(TIP_DEPART_EARLY);
        } else if minutes <= TRAFFIC_SMOOTH_MAX_MIN {
            tips.push(TIP_RELAXED);
        }
    }

    if tips.is_empty() {
        tips.extend(GENERIC_TIPS);
    }

    let headline = match weather {
        Some(weather) => format!("{} · 체감 {}°C", weather.description, weather.feels_like),
        None => DEFAULT_HEADLINE.to_string(),
    };

    JourneyTips {
        headline,
        tips: tips.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temp: i32, description: &str, wind_speed: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            name: "화천".to_string(),
            description: description.to_string(),
            temp,
            feels_like: temp - 3,
            temp_min: temp - 2,
            temp_max: temp + 3,
            humidity: 60,
            wind_speed,
        }
    }

    fn traffic(duration_min: i64) -> TrafficSnapshot {
        TrafficSnapshot {
            duration_min,
            distance_km: 120,
            summary: String::new(),
        }
    }

    #[test]
    fn test_no_inputs_yields_generic_tips() {
        let result = journey_tips(None, None);
        assert_eq!(result.headline, DEFAULT_HEADLINE);
        assert_eq!(result.tips, GENERIC_TIPS.map(str::to_string).to_vec());
    }

    #[test]
    fn test_harsh_winter_scenario() {
        let snowy = WeatherSnapshot {
            name: "화천".to_string(),
            description: "눈".to_string(),
            temp: -6,
            feels_like: -10,
            temp_min: -8,
            temp_max: -3,
            humidity: 80,
            wind_speed: 7.0,
        };

        let result = journey_tips(Some(&snowy), None);
        assert_eq!(result.tips, vec![TIP_EXTREME_COLD, TIP_SNOW, TIP_WIND]);
        assert!(!result.tips.contains(&TIP_COLD.to_string()));
        assert_eq!(result.headline, "눈 · 체감 -10°C");
    }

    #[test]
    fn test_cold_rules_are_exclusive() {
        assert_eq!(journey_tips(Some(&weather(-5, "맑음", 1.0)), None).tips, vec![TIP_EXTREME_COLD]);
        assert_eq!(journey_tips(Some(&weather(-4, "맑음", 1.0)), None).tips, vec![TIP_COLD]);
        assert_eq!(journey_tips(Some(&weather(2, "맑음", 1.0)), None).tips, vec![TIP_COLD]);
    }

    #[test]
    fn test_mild_weather_without_rules_falls_back() {
        let result = journey_tips(Some(&weather(3, "맑음", 2.0)), Some(&traffic(120)));
        assert_eq!(result.tips.len(), 3);
        assert_eq!(result.tips[0], GENERIC_TIPS[0]);
        assert_eq!(result.headline, "맑음 · 체감 0°C");
    }

    #[test]
    fn test_traffic_rules() {
        let busy = journey_tips(None, Some(&traffic(150)));
        assert_eq!(busy.tips, vec![TIP_DEPART_EARLY]);
        assert_eq!(busy.headline, DEFAULT_HEADLINE);

        assert_eq!(journey_tips(None, Some(&traffic(140))).tips, vec![TIP_DEPART_EARLY]);
        assert_eq!(journey_tips(None, Some(&traffic(100))).tips, vec![TIP_RELAXED]);
    }

    #[test]
    fn test_rules_combine_in_order() {
        let result = journey_tips(Some(&weather(0, "눈", 8.0)), Some(&traffic(90)));
        assert_eq!(result.tips, vec![TIP_COLD, TIP_SNOW, TIP_WIND, TIP_RELAXED]);
    }

    #[test]
    fn test_idempotent() {
        let w = weather(-7, "눈", 3.0);
        let t = traffic(145);
        let first = journey_tips(Some(&w), Some(&t));
        for _ in 0..5 {
            assert_eq!(journey_tips(Some(&w), Some(&t)), first);
        }
    }
}
