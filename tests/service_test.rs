//! End-to-end tests for the movies service
//!
//! Each test binds the real router to an ephemeral port against the
//! in-memory store backend and drives it over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use movies_service::http::handlers::AppState;
use movies_service::http::routes::create_router;
use movies_service::store::{DocumentStore, MemoryStore, StoreError};
use movies_service::types::Movie;

/// Spawn the service on an ephemeral port and return its address.
async fn spawn_service(store: Arc<dyn DocumentStore>) -> SocketAddr {
    let app = create_router(AppState { store });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn get_text(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(format!("http://{}{}", addr, path))
        .await
        .expect("request");
    let status = response.status();
    let body = response.text().await.expect("body");
    (status, body)
}

#[tokio::test]
async fn root_returns_deployment_banner() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    let (status, body) = get_text(addr, "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "My Deployment");
}

#[tokio::test]
async fn insert_reports_four_movies() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    let (status, body) = get_text(addr, "/insertMovies").await;
    assert_eq!(status, 200);
    assert_eq!(body, "<h2>Inserted 4 movies</h2>");
}

#[tokio::test]
async fn list_after_insert_contains_all_movies() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    get_text(addr, "/insertMovies").await;

    let (status, body) = get_text(addr, "/listMovies").await;
    assert_eq!(status, 200);
    assert!(body.contains("Batman (2021)<br>"));
    assert!(body.contains("Found: 4 movies"));
}

#[tokio::test]
async fn list_on_empty_collection_reports_zero() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    let (status, body) = get_text(addr, "/listMovies").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Found: 0 movies");
}

#[tokio::test]
async fn insert_then_clear_leaves_nothing_to_list() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    get_text(addr, "/insertMovies").await;

    let (status, body) = get_text(addr, "/clearCollection").await;
    assert_eq!(status, 200);
    assert_eq!(body, "<h2>Collection Cleared</h2>");

    let (_, body) = get_text(addr, "/listMovies").await;
    assert_eq!(body, "Found: 0 movies");
}

#[tokio::test]
async fn clear_on_empty_collection_is_idempotent() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    let (status, body) = get_text(addr, "/clearCollection").await;
    assert_eq!(status, 200);
    assert_eq!(body, "<h2>Collection Cleared</h2>");
}

#[tokio::test]
async fn inserted_count_is_fixed_regardless_of_prior_state() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;

    let (_, first) = get_text(addr, "/insertMovies").await;
    let (_, second) = get_text(addr, "/insertMovies").await;
    assert_eq!(first, "<h2>Inserted 4 movies</h2>");
    assert_eq!(second, "<h2>Inserted 4 movies</h2>");

    let (_, body) = get_text(addr, "/listMovies").await;
    assert!(body.contains("Found: 8 movies"));
}

#[tokio::test]
async fn summary_renders_with_fixed_year() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;
    let (status, body) = get_text(addr, "/getSummary").await;
    assert_eq!(status, 200);
    assert!(body.contains("2025"));
}

#[tokio::test]
async fn health_reports_ok_without_store_access() {
    // A store that fails every operation: /health must not care.
    let addr = spawn_service(Arc::new(FailingStore)).await;

    let response = reqwest::get(format!("http://{}/health", addr))
        .await
        .expect("request");
    assert_eq!(response.status(), 200);

    let payload: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(payload, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn store_failures_surface_as_opaque_500() {
    let addr = spawn_service(Arc::new(FailingStore)).await;

    for path in ["/insertMovies", "/listMovies", "/clearCollection"] {
        let (status, body) = get_text(addr, path).await;
        assert_eq!(status, 500, "{} should fail", path);
        assert_eq!(body, "Server error", "{} must not leak details", path);
    }
}

/// Store stub whose every operation fails, for the error contract tests.
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_movies(&self, _movies: &[Movie]) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Err(StoreError::Operation("find failed".to_string()))
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        Err(StoreError::Operation("delete failed".to_string()))
    }
}
