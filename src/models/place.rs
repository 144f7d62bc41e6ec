use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    pub name: String,
    /// Whole kilometres, at least 1.
    pub distance_km: i64,
    pub address: String,
}

/// Places near the venue, in two labeled groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    #[serde(default)]
    pub rest_areas: Vec<PlaceResult>,
    #[serde(default)]
    pub restaurants: Vec<PlaceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FoodResponse {
    /// Payload served when no place-search key is configured.
    pub fn unconfigured() -> Self {
        FoodResponse {
            rest_areas: vec![],
            restaurants: vec![],
            note: Some("카카오 로컬 API 미사용".to_string()),
        }
    }
}
