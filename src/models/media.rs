use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub image: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub items: Vec<ImageItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

const FALLBACK_IMAGES: [(&str, &str); 4] = [
    ("photo-1489515217757-5fd1be406fef", "겨울 축제"),
    ("photo-1452723312111-3a7d0db0e024", "얼음낚시"),
    ("photo-1482192505345-5655af888cc4", "보온 준비"),
    ("photo-1486325212027-8081e485255e", "화천 겨울"),
];

/// Fixed stock photos used when image search is unavailable.
pub fn fallback_images() -> Vec<ImageItem> {
    FALLBACK_IMAGES
        .iter()
        .map(|(photo, title)| ImageItem {
            image: format!(
                "https://images.unsplash.com/{}?auto=format&fit=crop&w=1200&q=80",
                photo
            ),
            thumbnail: format!(
                "https://images.unsplash.com/{}?auto=format&fit=crop&w=600&q=80",
                photo
            ),
            title: title.to_string(),
        })
        .collect()
}

impl ImageResponse {
    pub fn unconfigured() -> Self {
        ImageResponse {
            items: fallback_images(),
            note: Some("NAVER_SEARCH_CLIENT_ID/SECRET 필요".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl VideoItem {
    pub fn watch_url(&self) -> Option<String> {
        self.video_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/watch?v={}", id))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
}
