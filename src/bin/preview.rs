use festguide::config::Config;
use festguide::page::render::{FoodView, TrafficView, VideosView, WeatherView};
use festguide::page::{
    HttpFestivalApi, JourneyTips, Page, PageConfig, Panel, PollingObserver, RenderTarget,
    RouteStepView, ScrollDirection, SlidePosition, SlidesView, Span, TrackControls, UiEvent,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ── Config ──────────────────────────────────────────────

#[derive(Clone, Debug)]
struct PreviewConfig {
    api_base: String,
    linger_secs: u64,
}

impl PreviewConfig {
    /// Reads the preview-only settings; shared ones come from [`Config`].
    fn from_env(config: &Config) -> Result<Self, String> {
        let linger_secs: u64 = std::env::var("PREVIEW_LINGER_SECS")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .map_err(|_| "Invalid PREVIEW_LINGER_SECS")?;

        Ok(Self {
            api_base: std::env::var("PREVIEW_API_BASE")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{}", config.port)),
            linger_secs,
        })
    }
}

// ── Log target ──────────────────────────────────────────

/// Writes every region update to the log instead of a screen.
struct LogTarget;

fn log_panel<T: std::fmt::Debug>(region: &str, panel: &Panel<T>) {
    match panel {
        Panel::Ready(view) => tracing::info!(region, "{:?}", view),
        Panel::Unavailable { label, message } => {
            tracing::warn!(region, "{} ({})", label, message)
        }
    }
}

impl RenderTarget for LogTarget {
    fn weather(&mut self, panel: &Panel<WeatherView>) {
        log_panel("weather", panel);
    }

    fn traffic(&mut self, panel: &Panel<TrafficView>) {
        log_panel("traffic", panel);
    }

    fn food(&mut self, panel: &Panel<FoodView>) {
        log_panel("food", panel);
    }

    fn tips(&mut self, tips: &JourneyTips) {
        tracing::info!(region = "tips", headline = %tips.headline, "{}", tips.tips.join(" / "));
    }

    fn updated_at(&mut self, time_of_day: &str) {
        tracing::info!(region = "updated", "업데이트 {}", time_of_day);
    }

    fn countdown(&mut self, label: &str) {
        tracing::info!(region = "countdown", "{}", label);
    }

    fn slides(&mut self, view: &SlidesView) {
        tracing::info!(
            region = "gallery",
            category = %view.category,
            slides = view.slides.len(),
            indicators = view.indicators,
            "Gallery rebuilt"
        );
    }

    fn slide_position(&mut self, position: SlidePosition) {
        tracing::info!(
            region = "gallery",
            index = position.index,
            offset = position.offset_percent,
            "Slide"
        );
    }

    fn map_preview(&mut self, url: &str) {
        tracing::info!(region = "map", "{}", url);
    }

    fn videos(&mut self, panel: &Panel<VideosView>) {
        log_panel("videos", panel);
    }

    fn video_controls(&mut self, controls: TrackControls) {
        tracing::info!(
            region = "videos",
            can_prev = controls.can_prev,
            can_next = controls.can_next,
            "Track controls"
        );
    }

    fn route_step(&mut self, step: &RouteStepView) {
        tracing::info!(
            region = "route",
            index = step.index,
            progress = step.progress_percent,
            "{} · {}",
            step.title,
            step.meta
        );
    }

    fn stage(&mut self, index: usize) {
        tracing::info!(region = "stage", index, "Current stage");
    }

    fn reveal(&mut self, region: &str) {
        tracing::info!(region, "Revealed");
    }
}

// ── Main ────────────────────────────────────────────────

/// Page layout for the polling observer, top to bottom.
fn layout(config: &PageConfig) -> PollingObserver {
    let mut observer = PollingObserver::new();
    for (i, region) in config.stage_regions.iter().enumerate() {
        observer.set_layout(region, Span::new(i as f64 * 900.0, 900.0));
    }
    for (i, region) in config.reveal_regions.iter().enumerate() {
        observer.set_layout(region, Span::new(300.0 + i as f64 * 700.0, 500.0));
    }
    observer
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "preview=info,festguide=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let shared = Config::from_env()?;
    let preview = PreviewConfig::from_env(&shared)?;
    let linger = Duration::from_secs(preview.linger_secs);

    let config = PageConfig {
        api_base: preview.api_base.clone(),
        festival_date: shared.festival_date,
        ..PageConfig::default()
    };
    let observer = layout(&config);
    let regions = config.stage_regions.len();

    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
    let api = Arc::new(HttpFestivalApi::new(client, preview.api_base.clone()));

    tracing::info!("Previewing page against {}", preview.api_base);
    let mut page = Page::new(api, LogTarget, Box::new(observer), config);
    page.start().await;

    let (tx, rx) = mpsc::channel(32);
    let script = tokio::spawn(async move {
        let pause = Duration::from_millis(400);
        let mut events = vec![
            UiEvent::SelectStep("2".to_string()),
            UiEvent::SelectStep("4".to_string()),
            UiEvent::ScrollVideos(ScrollDirection::Next),
            UiEvent::SelectCategory("ice-fishing".to_string()),
            UiEvent::CarouselNext,
        ];
        for step in 0..regions * 2 {
            events.push(UiEvent::Scrolled(Span::new(step as f64 * 450.0, 800.0)));
        }

        for event in events {
            if tx.send(event).await.is_err() {
                return;
            }
            tokio::time::sleep(pause).await;
        }
        tokio::time::sleep(linger).await;
    });

    page.run(rx).await;
    script.await?;

    tracing::info!("Preview finished");
    Ok(())
}
