mod common;

use axum::ServiceExt;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use course_library::config::{Config, StoreBackend};
use course_library::routes::app_router;
use serde_json::Value;
use std::net::SocketAddr;
use tower::ServiceExt as _;

fn memory_config(cors_allowed_origins: Vec<String>) -> Config {
    Config {
        store_backend: StoreBackend::Memory,
        database_url: None,
        seed_file: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        cors_allowed_origins,
        db_max_connections: 10,
        db_connect_timeout: 30,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    }
}

/// Serves the full application router, rate limiting included.
async fn spawn_app(config: Config) -> String {
    let state = common::create_test_state(common::SAMPLE_CATALOG).await;
    let app = app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
        )
        .await
        .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let base = spawn_app(memory_config(Vec::new())).await;

    let response = reqwest::get(format!("{base}/api/topics/")).await.unwrap();

    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_feedback_routes_served_behind_rate_limit() {
    let base = spawn_app(memory_config(Vec::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/resources/cs101/Recursion/like"))
        .json(&serde_json::json!({ "url": "http://a" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["likes"], 1);
}

#[tokio::test]
async fn test_cors_any_origin_by_default() {
    let base = spawn_app(memory_config(Vec::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/topics"))
        .header("Origin", "http://frontend.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let base = spawn_app(memory_config(vec!["http://allowed.example".to_string()])).await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("{base}/api/topics"))
        .header("Origin", "http://allowed.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://allowed.example"
    );

    let denied = client
        .get(format!("{base}/api/topics"))
        .header("Origin", "http://other.example")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_health_through_app_router() {
    let base = spawn_app(memory_config(Vec::new())).await;

    let json: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let state = common::create_test_state("{}").await;

    let response = common::test_router(state)
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_feedback_burst_then_throttled() {
    use course_library::api::middleware::rate_limit::BURST_SIZE;

    let base = spawn_app(memory_config(Vec::new())).await;
    let client = reqwest::Client::new();
    let like_url = format!("{base}/api/resources/cs102/Recursion/like");

    let mut accepted = 0;
    let mut throttled = 0;
    for _ in 0..BURST_SIZE + 50 {
        let response = client
            .post(&like_url)
            .json(&serde_json::json!({ "url": "http://b" }))
            .send()
            .await
            .unwrap();
        match response.status().as_u16() {
            200 => accepted += 1,
            429 => throttled += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert!(accepted >= BURST_SIZE);
    assert!(throttled > 0);

    // Reads are not limited.
    let response = reqwest::get(format!("{base}/api/topics")).await.unwrap();
    assert_eq!(response.status(), 200);
}
