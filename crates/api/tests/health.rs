//! Integration tests for `/health` and the middleware shared by every route.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use condmon_api::config::ReportingMode;
use condmon_store::ReadingStore;
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/readings")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialized_store_is_healthy() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Extended);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert_eq!(json["reporting_mode"], "extended");
    assert_eq!(json["threshold_entries"], 201);
    assert_matches!(json["version"].as_str(), Some(v) if !v.is_empty());
}

#[tokio::test]
async fn missing_reading_file_is_degraded_not_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ReadingStore::new(dir.path().join("absent.csv"));
    let app = common::build_test_app(store, ReportingMode::Basic);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
    assert_eq!(json["reporting_mode"], "basic");
}

#[tokio::test]
async fn health_is_not_under_the_api_prefix() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Basic);

    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Request ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generated_request_id_is_returned() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Basic);

    let response = get(app, "/api/v1/kpis").await;
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn client_request_id_is_propagated() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Basic);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "round-7-north")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "round-7-north");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_from_dashboard_origin_allows_post() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Extended);

    let response = app.oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST"), "got {methods}");
}

#[tokio::test]
async fn preflight_from_other_origin_gets_no_allow_origin() {
    let (_dir, store) = common::temp_store();
    let app = common::build_test_app(store, ReportingMode::Extended);

    let response = app.oneshot(preflight("http://evil.example")).await.unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
