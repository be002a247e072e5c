//! Miscellaneous integration tests (health check, routing).

mod common;

use axum::http::StatusCode;
use common::TestClient;

/// Test health endpoint.
#[tokio::test]
async fn test_health_endpoint() {
    let client = TestClient::new();
    let (status, body) = client.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let client = TestClient::new();
    let (status, body) = client.get("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("\"error\""));
}

/// Chart endpoints only accept POST.
#[tokio::test]
async fn test_get_on_chart_not_allowed() {
    let client = TestClient::new();
    let (status, _) = client.get("/api/charts/top-vendors").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

/// Unicode vendor names survive ranking untouched.
#[tokio::test]
async fn test_unicode_vendor_names() {
    let client = TestClient::new();
    let (status, body) = client
        .post_json(
            "/api/charts/top-vendors",
            serde_json::json!([{"vendorName": "Café François ☕", "totalSpend": 10}]),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vendors"][0]["vendorName"], "Café François ☕");
}
