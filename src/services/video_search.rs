use crate::constants::{YOUTUBE_RESULTS_PAGE_URL, YOUTUBE_SEARCH_BASE_URL};
use crate::error::{Result, Upstream};
use crate::models::{VideoItem, VideoResponse};
use crate::services::{read_json, send_checked};
use reqwest::Client;
use serde::Deserialize;

/// Video search (YouTube Data API, Korean region, moderate safe search).
#[derive(Clone)]
pub struct VideoSearchClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl VideoSearchClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, YOUTUBE_SEARCH_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        VideoSearchClient {
            client,
            api_key,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Public results page for `query`, offered when the API is unavailable.
    pub fn results_page_url(query: &str) -> String {
        format!(
            "{}?search_query={}",
            YOUTUBE_RESULTS_PAGE_URL,
            urlencoding::encode(query)
        )
    }

    pub async fn search(&self, query: &str, max_results: u32) -> Result<VideoResponse> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Ok(VideoResponse {
                items: vec![],
                note: Some("YOUTUBE_API_KEY 필요".to_string()),
                search_url: Some(Self::results_page_url(query)),
            });
        };

        let request = self.client.get(&self.base_url).query(&[
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("q", query.to_string()),
            ("maxResults", max_results.to_string()),
            ("safeSearch", "moderate".to_string()),
            ("regionCode", "KR".to_string()),
            ("key", api_key.clone()),
        ]);

        let response = send_checked(request, Upstream::Videos).await?;
        let data: YoutubeSearchResponse = read_json(response, Upstream::Videos).await?;

        Ok(VideoResponse {
            items: data.items.into_iter().map(YoutubeItem::into_video).collect(),
            note: None,
            search_url: None,
        })
    }
}

// YouTube search response types

#[derive(Debug, Deserialize)]
struct YoutubeSearchResponse {
    #[serde(default)]
    items: Vec<YoutubeItem>,
}

#[derive(Debug, Deserialize)]
struct YoutubeItem {
    #[serde(default)]
    id: Option<YoutubeId>,
    #[serde(default)]
    snippet: Option<YoutubeSnippet>,
}

#[derive(Debug, Deserialize)]
struct YoutubeId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YoutubeSnippet {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "channelTitle", default)]
    channel_title: Option<String>,
    #[serde(default)]
    thumbnails: Option<YoutubeThumbnails>,
}

#[derive(Debug, Deserialize)]
struct YoutubeThumbnails {
    #[serde(default)]
    high: Option<YoutubeThumbnail>,
    #[serde(default)]
    default: Option<YoutubeThumbnail>,
}

#[derive(Debug, Deserialize)]
struct YoutubeThumbnail {
    #[serde(default)]
    url: Option<String>,
}

impl YoutubeItem {
    fn into_video(self) -> VideoItem {
        let snippet = self.snippet;
        let thumbnail = snippet
            .as_ref()
            .and_then(|s| s.thumbnails.as_ref())
            .and_then(|t| {
                t.high
                    .as_ref()
                    .and_then(|h| h.url.clone())
                    .or_else(|| t.default.as_ref().and_then(|d| d.url.clone()))
            });

        VideoItem {
            video_id: self.id.and_then(|id| id.video_id),
            title: snippet.as_ref().and_then(|s| s.title.clone()),
            thumbnail,
            channel: snippet.and_then(|s| s.channel_title),
        }
    }
}
