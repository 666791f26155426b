//! Integration tests for snippet generation.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_general_zone_embeds_seasonal_deltas_in_all_artifacts() {
    let (status, json) = common::get_json(
        common::fresh_app(),
        "/api/v1/snippets?timezone=America/New_York",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // January −300 and July −240 against the −360 reference.
    let ampscript = json["ampscript"].as_str().unwrap();
    assert!(ampscript.contains("DateAdd(@sourceDate, 1, \"H\")"));
    assert!(ampscript.contains("DateAdd(@sourceDate, 2, \"H\")"));

    let ssjs = json["ssjs"].as_str().unwrap();
    assert!(ssjs.contains("1 * 3600000"));
    assert!(ssjs.contains("2 * 3600000"));

    let query = json["query_expression"].as_str().unwrap();
    assert!(query.contains("DATEADD(HOUR, 1,"));
    assert!(query.contains("DATEADD(HOUR, 2,"));

    // The same zone token everywhere.
    for artifact in [ampscript, ssjs, query] {
        assert!(artifact.contains("EST"), "missing token in: {artifact}");
    }
}

#[tokio::test]
async fn test_dst_window_placeholders_use_the_clock_year() {
    let (_, json) = common::get_json(
        common::fresh_app(),
        "/api/v1/snippets?timezone=America/New_York",
    )
    .await;

    // 2026: second Sunday of March is the 8th, first Sunday of
    // November is the 1st.
    for field in ["query_expression", "ampscript", "ssjs"] {
        let artifact = json[field].as_str().unwrap();
        assert!(artifact.contains("2026-03-08"), "bad window in {field}");
        assert!(artifact.contains("2026-11-01"), "bad window in {field}");
        assert!(
            artifact.to_lowercase().contains("verify"),
            "missing correction flag in {field}"
        );
    }
}

#[tokio::test]
async fn test_utc_zone_embeds_constant_plus_six() {
    let (status, json) =
        common::get_json(common::fresh_app(), "/api/v1/snippets?timezone=UTC").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        json["query_expression"]
            .as_str()
            .unwrap()
            .contains("DATEADD(HOUR, 6,")
    );
    assert!(
        json["ampscript"]
            .as_str()
            .unwrap()
            .contains("DateAdd(@sourceDate, 6, \"H\")")
    );
    assert!(json["ssjs"].as_str().unwrap().contains("6 * 3600000"));
}

#[tokio::test]
async fn test_local_zone_uses_native_conversion() {
    let uri = format!("/api/v1/snippets?timezone={}", common::LOCAL_ZONE);
    let (_, json) = common::get_json(common::fresh_app(), &uri).await;

    for field in ["query_expression", "ampscript", "ssjs"] {
        assert!(
            json[field]
                .as_str()
                .unwrap()
                .contains("SystemDateToLocalDate"),
            "missing native conversion in {field}"
        );
    }
}

#[tokio::test]
async fn test_unknown_timezone_returns_400() {
    let (status, json) = common::get_json(
        common::fresh_app(),
        "/api/v1/snippets?timezone=Mars/Olympus_Mons",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_timezone");
}
