use serde::{Deserialize, Serialize};

/// Driving estimate from the origin to the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSnapshot {
    pub duration_min: i64,
    pub distance_km: i64,
    #[serde(default)]
    pub summary: String,
}

/// Label used when the route comes from the fastest-path option.
pub const FASTEST_ROUTE_SUMMARY: &str = "실시간 빠른 길 기준";
