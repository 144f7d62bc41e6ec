use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use festguide::cache::{MemoryCacheService, ResponseCache};
use festguide::config::{ClientCredentials, Config, UpstreamEndpoints};
use festguide::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Configuration with no credentials and no cache
#[allow(dead_code)]
pub fn unconfigured() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        upstream_cache_ttl: 0,
        upstream_timeout_secs: 5,
        ..Config::default()
    }
}

/// Configuration with every credential set, pointed at a mock upstream
#[allow(dead_code)]
pub fn configured(upstream: &MockUpstream) -> Config {
    let pair = || {
        Some(ClientCredentials {
            client_id: "test-id".to_string(),
            client_secret: "test-secret".to_string(),
        })
    };
    Config {
        openweather_key: Some("test-weather-key".to_string()),
        naver_maps: pair(),
        kakao_rest_key: Some("test-kakao-key".to_string()),
        naver_search: pair(),
        youtube_key: Some("test-youtube-key".to_string()),
        endpoints: upstream.endpoints(),
        ..unconfigured()
    }
}

/// Build the `/api` router the way the server binary does
#[allow(dead_code)]
pub fn app(config: &Config, cache: Option<Arc<dyn ResponseCache>>) -> Router {
    let state =
        Arc::new(AppState::from_config(config, cache).expect("Failed to build HTTP client"));
    Router::new().nest("/api", festguide::routes::create_router(state))
}

#[allow(dead_code)]
pub fn memory_cache() -> Arc<dyn ResponseCache> {
    Arc::new(MemoryCacheService::new(300, 100))
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Local stand-in for every third-party API, on an ephemeral port.
#[allow(dead_code)]
pub struct MockUpstream {
    pub base: String,
    hits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/weather", get(weather))
            .route("/directions", get(directions))
            .route("/directions/empty", get(empty_directions))
            .route("/map", get(map_image))
            .route("/places", get(places))
            .route("/images", get(images))
            .route("/youtube", get(youtube))
            .route("/reject", get(reject))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockUpstream {
            base: format!("http://{}", addr),
            hits,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn endpoints(&self) -> UpstreamEndpoints {
        UpstreamEndpoints {
            weather: self.url("/weather"),
            directions: self.url("/directions"),
            static_map: self.url("/map"),
            place_search: self.url("/places"),
            image_search: self.url("/images"),
            video_search: self.url("/youtube"),
        }
    }

    /// Requests served so far, across all routes.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

type Hits = State<Arc<AtomicUsize>>;

fn count(hits: &Hits) {
    hits.0.fetch_add(1, Ordering::SeqCst);
}

async fn weather(hits: Hits, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    count(&hits);
    if params.get("appid").map(String::as_str) != Some("test-weather-key") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad key"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "name": "화천",
            "weather": [{"description": "눈"}],
            "main": {"temp": -6.2, "feels_like": -10.4, "temp_min": -8.0,
                     "temp_max": -3.0, "humidity": 80},
            "wind": {"speed": 7.0}
        })),
    )
}

async fn directions(hits: Hits, headers: HeaderMap) -> impl IntoResponse {
    count(&hits);
    if headers.get("X-NCP-APIGW-API-KEY-ID").is_none() {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "missing key"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "route": {"trafast": [{"summary": {"duration": 9000, "distance": 200400}}]}
        })),
    )
}

async fn empty_directions(hits: Hits) -> Json<Value> {
    count(&hits);
    Json(json!({"code": 1, "message": "출발지와 도착지가 동일합니다."}))
}

async fn map_image(hits: Hits) -> impl IntoResponse {
    count(&hits);
    ([(CONTENT_TYPE, "image/jpeg")], vec![0xFF_u8, 0xD8, 0xFF, 0xE0])
}

async fn places(
    hits: Hits,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    count(&hits);
    let authorized = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "KakaoAK test-kakao-key");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"msg": "unauthorized"})));
    }

    let documents = if params.get("query").map(String::as_str) == Some("휴게소") {
        json!([
            {"place_name": "<b>가평</b>휴게소", "distance": "12345",
             "road_address_name": "", "address_name": "경기 가평군"},
            {"place_name": "화천 간이휴게소", "distance": "300",
             "road_address_name": "강원 화천군 화천읍", "address_name": "x"}
        ])
    } else {
        json!([
            {"place_name": "산천어 구이집", "distance": "1600",
             "road_address_name": "강원 화천군 산천어길 1", "address_name": ""}
        ])
    };
    (StatusCode::OK, Json(json!({ "documents": documents })))
}

async fn images(hits: Hits, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    count(&hits);
    let display: usize = params
        .get("display")
        .and_then(|d| d.parse().ok())
        .unwrap_or(10);
    let items = json!([
        {"link": "https://img.example.com/1.jpg", "thumbnail": "https://img.example.com/1s.jpg",
         "title": "<b>산천어</b> 축제"},
        {"link": "https://img.example.com/2.jpg", "thumbnail": "",
         "title": "얼음 낚시"}
    ]);
    let items: Vec<Value> = items
        .as_array()
        .unwrap()
        .iter()
        .take(display)
        .cloned()
        .collect();
    Json(json!({ "items": items }))
}

async fn youtube(hits: Hits) -> Json<Value> {
    count(&hits);
    Json(json!({
        "items": [{
            "id": {"videoId": "abc123"},
            "snippet": {
                "title": "화천 산천어 축제 브이로그",
                "channelTitle": "여행채널",
                "thumbnails": {"high": {"url": "https://i.ytimg.com/vi/abc123/hq.jpg"}}
            }
        }]
    }))
}

async fn reject(hits: Hits) -> impl IntoResponse {
    count(&hits);
    (StatusCode::SERVICE_UNAVAILABLE, "quota exceeded")
}
