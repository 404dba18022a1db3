#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use condmon_core::reading::Reading;
use condmon_core::thresholds::ThresholdTable;
use condmon_store::ReadingStore;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use condmon_api::app::build_router;
use condmon_api::config::{ReportingMode, ServerConfig};
use condmon_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(store: &ReadingStore, reporting_mode: ReportingMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_file: store.path().to_path_buf(),
        reporting_mode,
        report_window_days: 7,
    }
}

/// A reading store backed by a file inside a fresh temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn temp_store() -> (TempDir, ReadingStore) {
    let dir = TempDir::new().unwrap();
    let store = ReadingStore::new(dir.path().join("condition_data.csv"));
    store.ensure_initialized().unwrap();
    (dir, store)
}

/// Append readings directly to the store, bypassing the API.
pub fn seed(store: &ReadingStore, readings: &[Reading]) {
    for reading in readings {
        store.append(reading).unwrap();
    }
}

/// The production router over `store`, with the plant threshold table.
pub fn build_test_app(store: ReadingStore, reporting_mode: ReportingMode) -> Router {
    let config = test_config(&store, reporting_mode);
    build_router(AppState {
        store,
        config: Arc::new(config),
        thresholds: Arc::new(ThresholdTable::plant()),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
