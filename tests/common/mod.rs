#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use course_library::api;
use course_library::api::handlers::health_handler;
use course_library::application::services::ImportService;
use course_library::domain::seed::CatalogSeed;
use course_library::infrastructure::memory::MemoryStore;
use course_library::infrastructure::memory_repositories;
use course_library::state::AppState;
use std::sync::Arc;

/// Two courses sharing the "Recursion" topic name and the `http://a` link,
/// plus a course without a topic list.
///
/// `cs101` stores a stale topic count of 7.
pub const SAMPLE_CATALOG: &str = r#"{
    "courses": [
        { "courseid": "cs101", "coursename": "Intro", "numberOfTopics": 7 },
        { "courseid": "cs102", "coursename": "Data Structures", "numberOfTopics": 2 },
        { "courseid": "ma201", "coursename": "Linear Algebra", "numberOfTopics": 1 }
    ],
    "topics": [
        { "courseid": "cs101", "topics": ["Recursion"] },
        { "courseid": "cs102", "topics": ["Recursion", "Graph Theory"] }
    ],
    "resources": [
        { "courseid": "cs101", "topic": "Recursion", "links": ["http://a"] },
        { "courseid": "cs102", "topic": "Recursion", "links": ["http://a", "http://b"] },
        { "courseid": "cs102", "topic": "Graph Theory", "links": ["http://g"] }
    ]
}"#;

/// Builds application state over a fresh in-memory store loaded with
/// `catalog_json`.
pub async fn create_test_state(catalog_json: &str) -> AppState {
    let repositories = memory_repositories(Arc::new(MemoryStore::new()));

    let seed = CatalogSeed::from_json(catalog_json).unwrap();
    ImportService::new(repositories.clone())
        .import(seed)
        .await
        .unwrap();

    AppState::new(&repositories)
}

/// API and health routes without rate limiting, CORS or path normalization.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
}

pub async fn create_test_server(catalog_json: &str) -> TestServer {
    let state = create_test_state(catalog_json).await;
    TestServer::new(test_router(state)).unwrap()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
