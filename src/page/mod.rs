//! Page-side core: the state behind the festival page, independent of any UI toolkit.
//!
//! [`Page`] owns every piece of state and talks to the outside through three
//! seams: [`FestivalApi`] for data, [`RenderTarget`] for output and
//! [`VisibilityObserver`] for scroll-driven effects.

pub mod api;
pub mod badges;
pub mod carousel;
pub mod countdown;
pub mod observer;
pub mod orchestrator;
pub mod render;
pub mod route_steps;
pub mod tips;
pub mod video_track;

pub use api::{map_preview_url, FestivalApi, HttpFestivalApi, PageError};
pub use badges::{TrafficBadge, WeatherBadge};
pub use carousel::{builtin_slides, default_categories, Carousel, GalleryCategory, SlideItem};
pub use countdown::countdown_label;
pub use observer::{PollingObserver, Span, VisibilityObserver};
pub use orchestrator::{Page, PageConfig, UiEvent};
pub use render::{Panel, RenderTarget, SlidePosition, SlidesView, UNAVAILABLE_LABEL};
pub use route_steps::{default_route_steps, RouteStep, RouteStepSelector, RouteStepView};
pub use tips::{journey_tips, JourneyTips};
pub use video_track::{ScrollDirection, TrackControls, VideoTrack};
