use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use common::MockUpstream;
use tower::ServiceExt;

mod common;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_weather_is_mapped_and_rounded() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), None);

    let response = app
        .oneshot(get("/api/weather?lat=38.1065&lon=127.7084"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["name"], "화천");
    assert_eq!(json["description"], "눈");
    assert_eq!(json["temp"], -6);
    assert_eq!(json["feelsLike"], -10);
    assert_eq!(json["humidity"], 80);
    assert_eq!(json["windSpeed"], 7.0);
}

#[tokio::test]
async fn test_traffic_converts_units() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), None);

    let response = app.oneshot(get("/api/traffic")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["durationMin"], 150);
    assert_eq!(json["distanceKm"], 200);
    assert_eq!(json["summary"], "실시간 빠른 길 기준");
}

#[tokio::test]
async fn test_traffic_without_route_is_bad_gateway() {
    let upstream = MockUpstream::start().await;
    let mut config = common::configured(&upstream);
    config.endpoints.directions = upstream.url("/directions/empty");
    let app = common::app(&config, None);

    let response = app.oneshot(get("/api/traffic")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = common::body_json(response).await;
    assert_eq!(json["message"], "교통 API 응답이 비어 있습니다.");
}

#[tokio::test]
async fn test_food_groups_strip_markup_and_floor_distance() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), None);

    let response = app.oneshot(get("/api/food")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let rest_areas = json["restAreas"].as_array().unwrap();
    assert_eq!(rest_areas.len(), 2);
    assert_eq!(rest_areas[0]["name"], "가평휴게소");
    assert_eq!(rest_areas[0]["distanceKm"], 12);
    assert_eq!(rest_areas[0]["address"], "경기 가평군");
    assert_eq!(rest_areas[1]["distanceKm"], 1);
    assert_eq!(rest_areas[1]["address"], "강원 화천군 화천읍");

    let restaurants = json["restaurants"].as_array().unwrap();
    assert_eq!(restaurants[0]["name"], "산천어 구이집");
    assert_eq!(restaurants[0]["distanceKm"], 2);
    assert!(json.get("note").is_none());
}

#[tokio::test]
async fn test_rejected_upstream_is_bad_gateway_with_detail() {
    let upstream = MockUpstream::start().await;
    let mut config = common::configured(&upstream);
    config.endpoints.image_search = upstream.url("/reject");
    config.endpoints.place_search = upstream.url("/reject");
    let app = common::app(&config, None);

    let response = app.clone().oneshot(get("/api/images?query=x")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = common::body_json(response).await;
    assert_eq!(json["message"], "이미지 API 호출 실패");
    assert_eq!(json["detail"], "quota exceeded");

    let response = app.oneshot(get("/api/food")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    let mut config = common::unconfigured();
    config.openweather_key = Some("key".to_string());
    // Nothing listens on the discard port.
    config.endpoints.weather = "http://127.0.0.1:9/weather".to_string();
    let app = common::app(&config, None);

    let response = app.oneshot(get("/api/weather")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = common::body_json(response).await;
    assert_eq!(json["message"], "날씨 API 처리 중 오류");
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_images_and_videos_are_mapped() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), None);

    let response = app.clone().oneshot(get("/api/images")).await.unwrap();
    let json = common::body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "산천어 축제");
    assert_eq!(items[0]["image"], "https://img.example.com/1.jpg");

    let response = app.oneshot(get("/api/youtube?maxResults=0")).await.unwrap();
    let json = common::body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["videoId"], "abc123");
    assert_eq!(items[0]["channel"], "여행채널");
    assert_eq!(items[0]["thumbnail"], "https://i.ytimg.com/vi/abc123/hq.jpg");
}

#[tokio::test]
async fn test_map_passes_image_through() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), None);

    let response = app
        .oneshot(get("/api/map?startLat=37.5&startLon=127.0&level=11"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], &[0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn test_repeated_requests_are_served_from_cache() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), Some(common::memory_cache()));

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(get("/api/weather?lat=38.1065&lon=127.7084"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(upstream.hits(), 1);

    let response = app.oneshot(get("/api/health")).await.unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["cache"]["backend"], "memory");
    assert_eq!(json["cache"]["hits"], 2);
    assert_eq!(json["upstreams"]["weather"], true);
}

#[tokio::test]
async fn test_image_display_count_reaches_upstream() {
    let upstream = MockUpstream::start().await;
    let app = common::app(&common::configured(&upstream), Some(common::memory_cache()));

    let response = app
        .clone()
        .oneshot(get("/api/images?query=%20ice%20&display=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);

    // A different count is a different cache entry.
    let response = app.oneshot(get("/api/images?query=ice&display=2")).await.unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(upstream.hits(), 2);
}
