//! Stable application-wide constants.
//!
//! Values here are fixed upstream endpoints, query defaults that mirror what
//! the page sends when a parameter is missing, and the thresholds used by the
//! badge and tips rules. Env-var-driven settings live in
//! [`Config`](crate::config::Config).

use time::macros::date;
use time::Date;

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

/// Default upstream response cache TTL: 5 minutes. Overridden by `UPSTREAM_CACHE_TTL`.
pub const DEFAULT_UPSTREAM_CACHE_TTL_SECONDS: u64 = 300;
/// Maximum entries kept by the in-memory response cache.
pub const DEFAULT_MEMORY_CACHE_MAX_ENTRIES: u64 = 1_000;
/// Upper bound accepted for `UPSTREAM_CACHE_TTL`: one week.
pub const MAX_UPSTREAM_CACHE_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;
/// Per-request timeout for upstream calls. Overridden by `UPSTREAM_TIMEOUT_SECS`.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

/// Festival opening day used by the countdown. Overridden by `FESTIVAL_DATE`.
pub const DEFAULT_FESTIVAL_DATE: Date = date!(2027-01-09);

// --- Journey defaults (Seoul departure point, festival venue) ---

pub const DEFAULT_ORIGIN_LAT: f64 = 37.5278;
pub const DEFAULT_ORIGIN_LON: f64 = 127.0285;
pub const DEFAULT_VENUE_LAT: f64 = 38.1065;
pub const DEFAULT_VENUE_LON: f64 = 127.7084;

// --- Upstream endpoints ---

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const NAVER_DIRECTIONS_BASE_URL: &str =
    "https://naveropenapi.apigw.ntruss.com/map-direction/v1/driving";
pub const NAVER_STATIC_MAP_BASE_URL: &str = "https://maps.apigw.ntruss.com/map-static/v2/raster";
pub const KAKAO_KEYWORD_SEARCH_BASE_URL: &str = "https://dapi.kakao.com/v2/local/search/keyword.json";
pub const NAVER_IMAGE_SEARCH_BASE_URL: &str = "https://openapi.naver.com/v1/search/image";
pub const YOUTUBE_SEARCH_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const YOUTUBE_RESULTS_PAGE_URL: &str = "https://www.youtube.com/results";

/// Kakao's sample config ships this placeholder; treat it as "no key".
pub const KAKAO_KEY_PLACEHOLDER: &str = "YOUR_KAKAO_REST_API_KEY";

// --- Query defaults ---

pub const DEFAULT_MEDIA_QUERY: &str = "화천 산천어 축제";
pub const DEFAULT_IMAGE_DISPLAY: u32 = 8;
pub const DEFAULT_VIDEO_MAX_RESULTS: u32 = 6;
pub const DEFAULT_MAP_LEVEL: i64 = 9;
pub const STATIC_MAP_WIDTH: u32 = 800;
pub const STATIC_MAP_HEIGHT: u32 = 420;
pub const PLACE_SEARCH_RADIUS_METERS: u32 = 20_000;
pub const PLACE_SEARCH_SIZE: u32 = 5;
pub const REST_AREA_KEYWORD: &str = "휴게소";
pub const RESTAURANT_KEYWORD: &str = "맛집";

// --- Traffic thresholds (minutes) ---

/// At or below this the drive counts as smooth.
pub const TRAFFIC_SMOOTH_MAX_MIN: f64 = 100.0;
/// At or below this (and above smooth) the drive counts as moderate.
pub const TRAFFIC_MODERATE_MAX_MIN: f64 = 140.0;

// --- Tips thresholds ---

pub const EXTREME_COLD_MAX_C: i32 = -5;
pub const COLD_MAX_C: i32 = 2;
pub const STRONG_WIND_MIN_MS: f64 = 6.0;
pub const SNOW_INDICATOR: &str = "눈";

// --- Page behaviour ---

/// Carousel autoplay period.
pub const CAROUSEL_AUTOPLAY_INTERVAL_MS: u64 = 5_000;
/// Visible fraction at which a stage becomes the "current stage".
pub const STAGE_VISIBILITY_THRESHOLD: f32 = 0.5;
/// Visible fraction at which a marked element fades in.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.15;
/// Video track scrolls by this fraction of its viewport per click.
pub const VIDEO_TRACK_SCROLL_FRACTION: f64 = 0.8;
