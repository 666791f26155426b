//! Integration tests for the tracked-clock endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use zonewall_test_support::InMemoryStore;

#[tokio::test]
async fn test_first_render_pass_yields_default_pair_sorted_by_offset() {
    let store = Arc::new(InMemoryStore::new());
    let app = common::build_test_app(store.clone());

    let (status, json) = common::get_json(app, "/api/v1/clocks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["simulated"], false);

    let clocks = json["clocks"].as_array().unwrap();
    assert_eq!(clocks.len(), 2);
    // Fixed reference (−360) sorts before the local zone (+60).
    assert_eq!(clocks[0]["timezone_id"], "Etc/GMT+6");
    assert_eq!(clocks[0]["is_fixed_reference"], true);
    assert_eq!(clocks[0]["label"], "Salesforce / MCE");
    assert_eq!(clocks[0]["offset_label"], "GMT-06:00");
    assert_eq!(clocks[0]["dst"], "not-applicable");
    assert_eq!(clocks[1]["timezone_id"], common::LOCAL_ZONE);
    assert_eq!(clocks[1]["is_local"], true);
    assert_eq!(clocks[1]["dst"], "WINTER");

    // The sorted order is persisted immediately.
    let persisted = store.snapshot("clocks").unwrap();
    assert_eq!(persisted[0]["timezone"], "Etc/GMT+6");
}

#[tokio::test]
async fn test_add_clock_returns_201_and_lists_it() {
    let store = Arc::new(InMemoryStore::new());

    let (status, json) = common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["outcome"], "added");

    let (_, json) = common::get_json(common::build_test_app(store), "/api/v1/clocks").await;
    let ids: Vec<&str> = json["clocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["timezone_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["Etc/GMT+6", common::LOCAL_ZONE, "Asia/Tokyo"]);
}

#[tokio::test]
async fn test_duplicate_add_is_not_an_error() {
    let store = Arc::new(InMemoryStore::new());
    common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;

    let (status, json) = common::request_json(
        common::build_test_app(store),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "already-tracked");
}

#[tokio::test]
async fn test_add_beyond_limit_returns_409() {
    let store = Arc::new(InMemoryStore::new());

    // Default pair plus six additions fills the set of eight.
    for zone in [
        "Asia/Tokyo",
        "America/New_York",
        "Asia/Kolkata",
        "America/Los_Angeles",
        "Africa/Cairo",
        "Pacific/Auckland",
    ] {
        let (status, _) = common::request_json(
            common::build_test_app(store.clone()),
            "POST",
            "/api/v1/clocks",
            &serde_json::json!({"timezone": zone}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Australia/Sydney"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "limit_reached");

    // The set is unchanged.
    let (_, json) = common::get_json(common::build_test_app(store), "/api/v1/clocks").await;
    assert_eq!(json["clocks"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_add_unknown_timezone_returns_400() {
    let (status, json) = common::request_json(
        common::fresh_app(),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Mars/Olympus_Mons"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_timezone");
}

#[tokio::test]
async fn test_remove_clock_returns_204_and_drops_it() {
    let store = Arc::new(InMemoryStore::new());
    common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;

    // Sorted order: Etc/GMT+6, local, Asia/Tokyo.
    let (status, _) =
        common::delete_json(common::build_test_app(store.clone()), "/api/v1/clocks/2").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = common::get_json(common::build_test_app(store), "/api/v1/clocks").await;
    let clocks = json["clocks"].as_array().unwrap();
    assert_eq!(clocks.len(), 2);
    assert!(clocks.iter().all(|c| c["timezone_id"] != "Asia/Tokyo"));
}

#[tokio::test]
async fn test_remove_local_clock_is_rejected() {
    // Sorted order puts the local clock at index 1.
    let (status, json) =
        common::delete_json(common::fresh_app(), "/api/v1/clocks/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "local_clock_immutable");
}

#[tokio::test]
async fn test_remove_out_of_range_index_is_rejected() {
    let (status, json) =
        common::delete_json(common::fresh_app(), "/api/v1/clocks/99").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_index");
}

#[tokio::test]
async fn test_remove_then_add_restores_membership() {
    let store = Arc::new(InMemoryStore::new());
    common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;

    common::delete_json(common::build_test_app(store.clone()), "/api/v1/clocks/2").await;
    common::request_json(
        common::build_test_app(store.clone()),
        "POST",
        "/api/v1/clocks",
        &serde_json::json!({"timezone": "Asia/Tokyo"}),
    )
    .await;

    let (_, json) = common::get_json(common::build_test_app(store), "/api/v1/clocks").await;
    let mut ids: Vec<&str> = json["clocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["timezone_id"].as_str().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["Asia/Tokyo", "Etc/GMT+6", common::LOCAL_ZONE]);
}
