//! The page: explicit state, a startup fan-out and a single-task event loop.

use super::api::{map_preview_url, FestivalApi, PageError};
use super::carousel::{builtin_slides, default_categories, Carousel, GalleryCategory, SlideItem};
use super::countdown::countdown_label;
use super::observer::{Span, VisibilityObserver};
use super::render::{
    FoodView, Panel, RenderTarget, SlidePosition, SlidesView, TrafficView, VideosView, WeatherView,
};
use super::route_steps::{default_route_steps, RouteStep, RouteStepSelector, RouteStepView};
use super::tips::{journey_tips, JourneyTips};
use super::video_track::{ScrollDirection, VideoTrack};
use crate::constants::*;
use crate::format::format_time_of_day;
use crate::models::{
    Coordinates, FoodResponse, ImageResponse, TrafficSnapshot, VideoResponse, WeatherSnapshot,
};
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use time::macros::offset;
use time::{Date, OffsetDateTime, UtcOffset};
use tokio::sync::mpsc;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Base URL of the festguide server, used for map preview links.
    pub api_base: String,
    pub origin: Coordinates,
    pub venue: Coordinates,
    pub festival_date: Date,
    /// Offset used for "today" and the last-updated clock.
    pub utc_offset: UtcOffset,
    pub categories: Vec<GalleryCategory>,
    pub default_category: String,
    pub route_steps: Vec<RouteStep>,
    pub video_query: String,
    /// Stage sections in order; index `i` lights stage indicator `i`.
    pub stage_regions: Vec<String>,
    /// Elements that fade in once.
    pub reveal_regions: Vec<String>,
    pub video_track_width: f64,
    pub video_card_width: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            api_base: format!("http://127.0.0.1:{}", DEFAULT_PORT),
            origin: Coordinates {
                lat: DEFAULT_ORIGIN_LAT,
                lon: DEFAULT_ORIGIN_LON,
            },
            venue: Coordinates {
                lat: DEFAULT_VENUE_LAT,
                lon: DEFAULT_VENUE_LON,
            },
            festival_date: DEFAULT_FESTIVAL_DATE,
            utc_offset: offset!(+9),
            categories: default_categories(),
            default_category: "festival".to_string(),
            route_steps: default_route_steps(),
            video_query: DEFAULT_MEDIA_QUERY.to_string(),
            stage_regions: (0..4).map(|i| format!("stage-{}", i)).collect(),
            reveal_regions: ["weather", "traffic", "food", "gallery", "videos"]
                .iter()
                .map(|r| format!("reveal-{}", r))
                .collect(),
            video_track_width: 960.0,
            video_card_width: 320.0,
        }
    }
}

/// Everything the user (or the host) can do to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectCategory(String),
    CarouselNext,
    CarouselPrev,
    /// Indicator click.
    CarouselGoTo(usize),
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// Route step click, carrying the control's ordinal attribute.
    SelectStep(String),
    ScrollVideos(ScrollDirection),
    VideoTrackResized { viewport: f64, content: f64 },
    /// Viewport moved; drives polling observers.
    Scrolled(Span),
    /// A native observer reported a threshold crossing.
    RegionVisible(String),
}

enum Loaded {
    Weather(Result<WeatherSnapshot, PageError>),
    Traffic(Result<TrafficSnapshot, PageError>),
    Food(Result<FoodResponse, PageError>),
    Gallery(String, Result<ImageResponse, PageError>),
    Videos(Result<VideoResponse, PageError>),
}

impl Loaded {
    /// Weather, traffic and food gate the "last updated" stamp.
    fn is_primary(&self) -> bool {
        matches!(self, Loaded::Weather(_) | Loaded::Traffic(_) | Loaded::Food(_))
    }
}

const PRIMARY_LOADS: usize = 3;

pub struct Page<A, R> {
    api: Arc<A>,
    target: R,
    observer: Box<dyn VisibilityObserver>,
    config: PageConfig,
    weather: Option<WeatherSnapshot>,
    traffic: Option<TrafficSnapshot>,
    tips: JourneyTips,
    carousel: Carousel,
    category: Option<String>,
    steps: RouteStepSelector,
    track: VideoTrack,
    revealed: HashSet<String>,
}

impl<A, R> Page<A, R>
where
    A: FestivalApi + 'static,
    R: RenderTarget,
{
    pub fn new(
        api: Arc<A>,
        target: R,
        observer: Box<dyn VisibilityObserver>,
        config: PageConfig,
    ) -> Self {
        let steps = RouteStepSelector::new(config.route_steps.clone());
        let track = VideoTrack::new(config.video_track_width, 0.0);
        Page {
            api,
            target,
            observer,
            weather: None,
            traffic: None,
            tips: journey_tips(None, None),
            carousel: Carousel::new(Duration::from_millis(CAROUSEL_AUTOPLAY_INTERVAL_MS)),
            category: None,
            steps,
            track,
            revealed: HashSet::new(),
            config,
        }
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn route_steps(&self) -> &RouteStepSelector {
        &self.steps
    }

    pub fn latest_weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn latest_traffic(&self) -> Option<&TrafficSnapshot> {
        self.traffic.as_ref()
    }

    pub fn tips(&self) -> &JourneyTips {
        &self.tips
    }

    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.config.utc_offset)
    }

    /// Initial render plus every startup load. Returns once all loads have
    /// settled; failures only affect their own region.
    pub async fn start(&mut self) {
        let today = self.now().date();
        self.target
            .countdown(&countdown_label(self.config.festival_date, today));

        let level = u8::try_from(DEFAULT_MAP_LEVEL).unwrap_or(9);
        let url = map_preview_url(
            &self.config.api_base,
            self.config.origin,
            self.config.venue,
            level,
        );
        self.target.map_preview(&url);

        self.select_step(0);
        self.target.video_controls(self.track.controls());

        for region in &self.config.stage_regions {
            self.observer.observe(region, STAGE_VISIBILITY_THRESHOLD);
        }
        for region in &self.config.reveal_regions {
            self.observer.observe(region, REVEAL_VISIBILITY_THRESHOLD);
        }

        let mut loads = self.startup_loads();
        let mut pending_primary = PRIMARY_LOADS;

        while let Some(loaded) = loads.next().await {
            let primary = loaded.is_primary();
            self.apply(loaded);
            if primary {
                pending_primary -= 1;
                if pending_primary == 0 {
                    let stamp = format_time_of_day(self.now());
                    tracing::debug!("Primary loads settled at {}", stamp);
                    self.target.updated_at(&stamp);
                }
            }
        }
    }

    fn startup_loads(&self) -> FuturesUnordered<BoxFuture<'static, Loaded>> {
        let loads: FuturesUnordered<BoxFuture<'static, Loaded>> = FuturesUnordered::new();
        let origin = self.config.origin;
        let venue = self.config.venue;

        let api = Arc::clone(&self.api);
        loads.push(async move { Loaded::Weather(api.weather(venue).await) }.boxed());

        let api = Arc::clone(&self.api);
        loads.push(async move { Loaded::Traffic(api.traffic(origin, venue).await) }.boxed());

        let api = Arc::clone(&self.api);
        loads.push(async move { Loaded::Food(api.food(venue).await) }.boxed());

        if let Some(category) = self.find_category(&self.config.default_category) {
            let api = Arc::clone(&self.api);
            let key = category.key.clone();
            let query = category.query.clone();
            loads.push(
                async move {
                    let result = api.images(&query, DEFAULT_IMAGE_DISPLAY).await;
                    Loaded::Gallery(key, result)
                }
                .boxed(),
            );
        }

        let api = Arc::clone(&self.api);
        let query = self.config.video_query.clone();
        loads.push(
            async move { Loaded::Videos(api.videos(&query, DEFAULT_VIDEO_MAX_RESULTS).await) }
                .boxed(),
        );

        loads
    }

    fn find_category(&self, key: &str) -> Option<&GalleryCategory> {
        self.config.categories.iter().find(|c| c.key == key)
    }

    fn apply(&mut self, loaded: Loaded) {
        match loaded {
            Loaded::Weather(result) => {
                let panel = match result {
                    Ok(snapshot) => {
                        let view = WeatherView::from(&snapshot);
                        self.weather = Some(snapshot);
                        Panel::Ready(view)
                    }
                    Err(e) => {
                        tracing::warn!(region = "weather", "Load failed: {}", e);
                        self.weather = None;
                        Panel::unavailable(e.to_string())
                    }
                };
                self.target.weather(&panel);
                self.refresh_tips();
            }
            Loaded::Traffic(result) => {
                let panel = match result {
                    Ok(snapshot) => {
                        let view = TrafficView::from(&snapshot);
                        self.traffic = Some(snapshot);
                        Panel::Ready(view)
                    }
                    Err(e) => {
                        tracing::warn!(region = "traffic", "Load failed: {}", e);
                        self.traffic = None;
                        Panel::unavailable(e.to_string())
                    }
                };
                self.target.traffic(&panel);
                self.refresh_tips();
            }
            Loaded::Food(result) => {
                let panel = match result {
                    Ok(food) => Panel::Ready(FoodView::from(&food)),
                    Err(e) => {
                        tracing::warn!(region = "food", "Load failed: {}", e);
                        Panel::unavailable(e.to_string())
                    }
                };
                self.target.food(&panel);
                self.refresh_tips();
            }
            Loaded::Gallery(key, result) => self.show_gallery(key, result),
            Loaded::Videos(result) => {
                let panel = match result {
                    Ok(videos) => {
                        let content = videos.items.len() as f64 * self.config.video_card_width;
                        let controls = self.track.resize(self.config.video_track_width, content);
                        self.target.video_controls(controls);
                        Panel::Ready(VideosView::from(&videos))
                    }
                    Err(e) => {
                        tracing::warn!(region = "videos", "Load failed: {}", e);
                        Panel::unavailable(e.to_string())
                    }
                };
                self.target.videos(&panel);
            }
        }
    }

    fn refresh_tips(&mut self) {
        self.tips = journey_tips(self.weather.as_ref(), self.traffic.as_ref());
        self.target.tips(&self.tips);
    }

    /// Rebuild the carousel from a gallery result. Empty or failed results
    /// show the built-in slides.
    fn show_gallery(&mut self, key: String, result: Result<ImageResponse, PageError>) {
        let mut slides: Vec<SlideItem> = match result {
            Ok(response) => response
                .items
                .into_iter()
                .filter(|item| !item.image.is_empty())
                .map(SlideItem::from)
                .collect(),
            Err(e) => {
                tracing::warn!(region = "gallery", category = %key, "Load failed: {}", e);
                Vec::new()
            }
        };
        if slides.is_empty() {
            slides = builtin_slides();
        }

        self.carousel.replace(slides, Instant::now());
        self.target.slides(&SlidesView {
            category: key.clone(),
            slides: self.carousel.slides().to_vec(),
            indicators: self.carousel.len(),
            index: self.carousel.index(),
        });
        self.render_slide_position();
        self.category = Some(key);
    }

    /// Full reset of the carousel for another gallery tab.
    pub async fn load_category(&mut self, key: &str) {
        let Some(category) = self.find_category(key) else {
            tracing::debug!("Unknown gallery category '{}'", key);
            return;
        };
        let query = category.query.clone();
        let key = category.key.clone();

        self.carousel.pause();
        let result = self.api.images(&query, DEFAULT_IMAGE_DISPLAY).await;
        self.show_gallery(key, result);
    }

    fn render_slide_position(&mut self) {
        self.target.slide_position(SlidePosition {
            index: self.carousel.index(),
            offset_percent: self.carousel.offset_percent(),
        });
    }

    fn select_step(&mut self, index: usize) {
        if let Some(view) = self.steps.select(index) {
            self.show_step(view);
        }
    }

    fn show_step(&mut self, view: RouteStepView) {
        if let Some((coordinate, zoom)) = view.map_target {
            let url = map_preview_url(&self.config.api_base, coordinate, coordinate, zoom);
            self.target.map_preview(&url);
        }
        self.target.route_step(&view);
    }

    fn region_visible(&mut self, region: &str) {
        if let Some(stage) = self.config.stage_regions.iter().position(|r| r == region) {
            self.target.stage(stage);
        } else if self.config.reveal_regions.iter().any(|r| r == region)
            && self.revealed.insert(region.to_string())
        {
            self.target.reveal(region);
            self.observer.unobserve(region);
        }
    }

    /// Apply one UI event.
    pub async fn handle(&mut self, event: UiEvent) {
        let now = Instant::now();
        match event {
            UiEvent::SelectCategory(key) => self.load_category(&key).await,
            UiEvent::CarouselNext => {
                if self.carousel.next().is_some() {
                    self.render_slide_position();
                }
            }
            UiEvent::CarouselPrev => {
                if self.carousel.prev().is_some() {
                    self.render_slide_position();
                }
            }
            UiEvent::CarouselGoTo(index) => {
                let target = isize::try_from(index).unwrap_or(0);
                if self.carousel.go_to(target).is_some() {
                    self.render_slide_position();
                }
            }
            UiEvent::PointerEnter => self.carousel.pointer_enter(),
            UiEvent::PointerLeave => self.carousel.pointer_leave(now),
            UiEvent::FocusIn => self.carousel.focus_in(),
            UiEvent::FocusOut => self.carousel.focus_out(now),
            UiEvent::SelectStep(ordinal) => {
                if let Some(view) = self.steps.select_ordinal(&ordinal) {
                    self.show_step(view);
                }
            }
            UiEvent::ScrollVideos(direction) => {
                let controls = self.track.scroll(direction);
                self.target.video_controls(controls);
            }
            UiEvent::VideoTrackResized { viewport, content } => {
                let controls = self.track.resize(viewport, content);
                self.target.video_controls(controls);
            }
            UiEvent::Scrolled(viewport) => {
                for region in self.observer.viewport_changed(viewport) {
                    self.region_visible(&region);
                }
            }
            UiEvent::RegionVisible(region) => self.region_visible(&region),
        }
    }

    /// Autoplay step, if due.
    pub fn tick(&mut self) {
        if self.carousel.on_tick(Instant::now()).is_some() {
            self.render_slide_position();
        }
    }

    /// Process events until the sender side closes, advancing the carousel
    /// whenever its autoplay deadline passes.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        loop {
            let deadline = self.carousel.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
                _ = autoplay_due(deadline) => self.tick(),
            }
        }
        tracing::debug!("Page event loop finished");
    }
}

async fn autoplay_due(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
