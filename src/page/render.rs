//! View models for each page region and the target that draws them.

use super::badges::{TrafficBadge, WeatherBadge};
use super::carousel::SlideItem;
use super::route_steps::RouteStepView;
use super::tips::JourneyTips;
use super::video_track::TrackControls;
use crate::format::format_duration;
use crate::models::{FoodResponse, PlaceResult, TrafficSnapshot, VideoResponse, WeatherSnapshot};
use serde::Serialize;

pub const UNAVAILABLE_LABEL: &str = "정보를 불러올 수 없습니다";

/// A region either shows data or a fixed label with the failure message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Panel<T> {
    Ready(T),
    Unavailable { label: &'static str, message: String },
}

impl<T> Panel<T> {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Panel::Unavailable {
            label: UNAVAILABLE_LABEL,
            message: message.into(),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(view) => Some(view),
            Panel::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub location: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub range: String,
    pub humidity: String,
    pub wind: String,
    pub badge: WeatherBadge,
}

impl From<&WeatherSnapshot> for WeatherView {
    fn from(w: &WeatherSnapshot) -> Self {
        WeatherView {
            location: w.name.clone(),
            description: w.description.clone(),
            temperature: format!("{}°C", w.temp),
            feels_like: format!("체감 {}°C", w.feels_like),
            range: format!("{}° / {}°", w.temp_min, w.temp_max),
            humidity: format!("{}%", w.humidity),
            wind: format!("{:.1} m/s", w.wind_speed),
            badge: WeatherBadge::classify(&w.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficView {
    pub duration: String,
    pub distance: String,
    pub summary: String,
    pub badge: TrafficBadge,
}

impl From<&TrafficSnapshot> for TrafficView {
    fn from(t: &TrafficSnapshot) -> Self {
        TrafficView {
            duration: format_duration(t.duration_min),
            distance: format!("{} km", t.distance_km),
            summary: t.summary.clone(),
            badge: TrafficBadge::classify(t.duration_min as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceLine {
    pub name: String,
    pub detail: String,
}

impl From<&PlaceResult> for PlaceLine {
    fn from(place: &PlaceResult) -> Self {
        let detail = if place.address.is_empty() {
            format!("{} km", place.distance_km)
        } else {
            format!("{} km · {}", place.distance_km, place.address)
        };
        PlaceLine {
            name: place.name.clone(),
            detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodView {
    pub rest_areas: Vec<PlaceLine>,
    pub restaurants: Vec<PlaceLine>,
    pub note: Option<String>,
}

impl From<&FoodResponse> for FoodView {
    fn from(food: &FoodResponse) -> Self {
        FoodView {
            rest_areas: food.rest_areas.iter().map(PlaceLine::from).collect(),
            restaurants: food.restaurants.iter().map(PlaceLine::from).collect(),
            note: food.note.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoCard {
    pub title: String,
    pub channel: String,
    pub thumbnail: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideosView {
    pub cards: Vec<VideoCard>,
    pub note: Option<String>,
    /// Shown as "search on YouTube" when there are no cards.
    pub search_url: Option<String>,
}

impl From<&VideoResponse> for VideosView {
    fn from(videos: &VideoResponse) -> Self {
        VideosView {
            cards: videos
                .items
                .iter()
                .map(|item| VideoCard {
                    title: item.title.clone().unwrap_or_default(),
                    channel: item.channel.clone().unwrap_or_default(),
                    thumbnail: item.thumbnail.clone(),
                    link: item.watch_url(),
                })
                .collect(),
            note: videos.note.clone(),
            search_url: videos.search_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlidesView {
    pub category: String,
    pub slides: Vec<SlideItem>,
    /// One indicator per slide.
    pub indicators: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlidePosition {
    pub index: usize,
    pub offset_percent: i64,
}

/// Named regions of the page. Every method fully replaces its region.
pub trait RenderTarget: Send {
    fn weather(&mut self, panel: &Panel<WeatherView>);
    fn traffic(&mut self, panel: &Panel<TrafficView>);
    fn food(&mut self, panel: &Panel<FoodView>);
    fn tips(&mut self, tips: &JourneyTips);
    fn updated_at(&mut self, time_of_day: &str);
    fn countdown(&mut self, label: &str);
    fn slides(&mut self, view: &SlidesView);
    fn slide_position(&mut self, position: SlidePosition);
    fn map_preview(&mut self, url: &str);
    fn videos(&mut self, panel: &Panel<VideosView>);
    fn video_controls(&mut self, controls: TrackControls);
    fn route_step(&mut self, step: &RouteStepView);
    fn stage(&mut self, index: usize);
    fn reveal(&mut self, region: &str);
}
