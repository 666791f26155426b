//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use zonewall_core::store::StateStore;
use zonewall_test_support::{FixedClock, FixedOffsetResolver, InMemoryStore};

use zonewall_api::routes;
use zonewall_api::state::AppState;

/// Local zone used across all integration tests.
pub const LOCAL_ZONE: &str = "Europe/Berlin";

/// Fixed real-clock timestamp used across all integration tests
/// (January, so table zones resolve their winter offsets).
pub fn fixed_clock() -> FixedClock {
    FixedClock(chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap())
}

/// Deterministic resolver covering the catalog zones the tests touch.
pub fn test_resolver() -> FixedOffsetResolver {
    FixedOffsetResolver::new()
        .with_zone(LOCAL_ZONE, 60, 120, "CET")
        .with_zone("Etc/GMT+6", -360, -360, "CST6")
        .with_zone("Asia/Tokyo", 540, 540, "JST")
        .with_zone("America/New_York", -300, -240, "EST")
        .with_zone("Asia/Kolkata", 330, 330, "IST")
        .with_zone("America/Los_Angeles", -480, -420, "PST")
        .with_zone("Africa/Cairo", 120, 120, "EET")
        .with_zone("Pacific/Auckland", 780, 720, "NZST")
        .with_zone("Australia/Sydney", 660, 600, "AEST")
}

/// Build the full app router over an in-memory store with a
/// deterministic clock and resolver. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app(store: Arc<dyn StateStore>) -> Router {
    let app_state = AppState::new(
        store,
        Arc::new(test_resolver()),
        Arc::new(fixed_clock()),
        LOCAL_ZONE.to_owned(),
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/clocks", routes::clocks::router())
        .nest("/api/v1/simulation", routes::simulation::router())
        .nest("/api/v1/snippets", routes::snippets::router())
        .nest("/api/v1/catalog", routes::catalog::router())
        .nest("/api/v1/preferences", routes::preferences::router())
        .with_state(app_state)
}

/// Build the app over a fresh empty store.
pub fn fresh_app() -> Router {
    build_test_app(Arc::new(InMemoryStore::new()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a request with a JSON body and return the response.
pub async fn request_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
