//! Shared test utilities for integration tests.
//!
//! `TestClient` drives the real router in-process so tests exercise the same
//! handlers and layers that production serves.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use invoice_dashboard::config::Config;
use invoice_dashboard::server::build_app;
use tower::ServiceExt;

pub struct TestClient {
    router: Router,
}

impl TestClient {
    /// Create a client with default configuration (de-DE, EUR).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let (_state, router) = build_app(config);
        Self { router }
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// POST a raw body with a JSON content type.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST a JSON value and parse the JSON response.
    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let (status, text) = self.post_raw(uri, &body.to_string()).await;
        let parsed = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
        (status, parsed)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }
}
