pub mod api;
pub mod dashboard;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Whole dashboard from one snapshot
        .route("/api/dashboard", post(dashboard::build))
        // Single charts (body: the bare upstream array)
        .route("/api/charts/cash-outflow", post(api::cash_outflow))
        .route("/api/charts/invoice-trend", post(api::invoice_trend))
        .route("/api/charts/top-vendors", post(api::top_vendors))
        .route("/api/charts/category-spend", post(api::category_spend))
        .route("/api/charts/invoices", post(api::invoices))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

pub async fn fallback(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Not found: {}", uri.path()) })),
    )
        .into_response()
}
