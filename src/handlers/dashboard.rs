use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::handlers::api::json_kind;
use crate::models::{DashboardSnapshot, DashboardView};
use crate::services::dashboard;
use crate::state::AppState;

/// Parse a snapshot body. Empty or `null` is a snapshot with nothing in it.
pub fn parse_snapshot(body: &[u8]) -> AppResult<DashboardSnapshot> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DashboardSnapshot::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.is_null() {
        return Ok(DashboardSnapshot::default());
    }
    if !value.is_object() {
        return Err(AppError::Validation(format!(
            "Expected a snapshot object, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

pub async fn build(State(state): State<AppState>, body: Bytes) -> AppResult<Json<DashboardView>> {
    debug!(bytes = body.len(), "Building dashboard from snapshot");
    let snapshot = parse_snapshot(&body)?;
    Ok(Json(dashboard::build(&snapshot, &state.formatting)))
}
