//! Integration tests for the catalog picker endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_catalog_lists_all_zones_sorted_by_offset() {
    let (status, json) = common::get_json(common::fresh_app(), "/api/v1/catalog").await;

    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().unwrap();
    assert!(entries.len() > 50);

    let offsets: Vec<i64> = entries
        .iter()
        .map(|e| e["offset_minutes"].as_i64().unwrap())
        .collect();
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));

    assert!(entries.iter().any(|e| e["id"] == "Etc/GMT+6"
        && e["label"] == "Salesforce / MCE"
        && e["offset_label"] == "GMT-06:00"));
}

#[tokio::test]
async fn test_filter_matches_search_aliases() {
    let (_, json) =
        common::get_json(common::fresh_app(), "/api/v1/catalog?filter=mumbai").await;

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "Asia/Kolkata");
    assert_eq!(entries[0]["alternate_name"], "India Standard Time");
}

#[tokio::test]
async fn test_filter_without_match_yields_empty_list() {
    let (_, json) =
        common::get_json(common::fresh_app(), "/api/v1/catalog?filter=zzzzzz").await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
