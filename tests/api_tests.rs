use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_reports_unconfigured_upstreams() {
    let app = common::app(&common::unconfigured(), None);

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["upstreams"]["weather"], false);
    assert_eq!(json["upstreams"]["youtube"], false);
    assert!(json["cache"].is_null());
}

#[tokio::test]
async fn test_images_fallback_without_credentials() {
    let app = common::app(&common::unconfigured(), None);

    let response = app
        .oneshot(get("/api/images?query=%ED%99%94%EC%B2%9C&display=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["title"], "겨울 축제");
    assert_eq!(items[3]["title"], "화천 겨울");
    assert!(items[0]["image"].as_str().unwrap().starts_with("https://"));
    assert!(json["note"].is_string());
}

#[tokio::test]
async fn test_weather_without_key_is_bad_request() {
    let app = common::app(&common::unconfigured(), None);

    let response = app
        .oneshot(get("/api/weather?lat=38.1&lon=127.7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("OPENWEATHER_KEY"));
}

#[tokio::test]
async fn test_traffic_and_map_without_credentials_are_bad_request() {
    let app = common::app(&common::unconfigured(), None);

    let response = app.clone().oneshot(get("/api/traffic")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/map?level=11")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("NAVER_MAPS"));
}

#[tokio::test]
async fn test_food_without_key_returns_empty_groups() {
    let app = common::app(&common::unconfigured(), None);

    let response = app.oneshot(get("/api/food?lat=38.1&lon=127.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["restAreas"].as_array().unwrap().len(), 0);
    assert_eq!(json["restaurants"].as_array().unwrap().len(), 0);
    assert_eq!(json["note"], "카카오 로컬 API 미사용");
}

#[tokio::test]
async fn test_youtube_without_key_links_to_search_page() {
    let app = common::app(&common::unconfigured(), None);

    let response = app.oneshot(get("/api/youtube?query=ice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(
        json["searchUrl"],
        "https://www.youtube.com/results?search_query=ice"
    );
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_rejected() {
    let app = common::app(&common::unconfigured(), None);

    let response = app
        .oneshot(get("/api/food?lat=95&lon=127.7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
