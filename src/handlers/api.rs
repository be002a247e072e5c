use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{
    CashOutflowChart, CategoryChart, CategorySpend, Invoice, InvoiceTable, InvoiceTrendChart,
    MonthlyMetric, PeriodAmount, VendorRanking, VendorSpend,
};
use crate::services::{cash_outflow, category_share, invoice_table, invoice_trend, vendor_ranking};
use crate::state::AppState;

/// Parse a bare upstream array. An empty body or `null` means the collection
/// is absent.
pub fn parse_collection<T: DeserializeOwned>(body: &[u8]) -> AppResult<Option<Vec<T>>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.is_null() {
        return Ok(None);
    }
    if !value.is_array() {
        return Err(AppError::Validation(format!(
            "Expected a JSON array, got {}",
            json_kind(&value)
        )));
    }
    Ok(Some(serde_json::from_value(value)?))
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub async fn cash_outflow(body: Bytes) -> AppResult<Json<CashOutflowChart>> {
    let points: Option<Vec<PeriodAmount>> = parse_collection(&body)?;
    debug!(records = points.as_ref().map_or(0, Vec::len), "Classifying cash outflow");
    Ok(Json(cash_outflow::classify(points.as_deref())))
}

pub async fn invoice_trend(body: Bytes) -> AppResult<Json<InvoiceTrendChart>> {
    let metrics: Option<Vec<MonthlyMetric>> = parse_collection(&body)?;
    debug!(records = metrics.as_ref().map_or(0, Vec::len), "Completing invoice trend");
    Ok(Json(invoice_trend::complete(metrics.as_deref())))
}

pub async fn top_vendors(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<VendorRanking>> {
    let vendors: Option<Vec<VendorSpend>> = parse_collection(&body)?;
    debug!(records = vendors.as_ref().map_or(0, Vec::len), "Ranking vendors");
    Ok(Json(vendor_ranking::rank_or_fallback(
        vendors.as_deref(),
        &state.formatting,
    )))
}

pub async fn category_spend(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<CategoryChart>> {
    let categories: Option<Vec<CategorySpend>> = parse_collection(&body)?;
    Ok(Json(category_share::slices(
        categories.as_deref(),
        &state.formatting,
    )))
}

pub async fn invoices(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<InvoiceTable>> {
    let invoices: Option<Vec<Invoice>> = parse_collection(&body)?;
    Ok(Json(invoice_table::rows(invoices.as_deref(), &state.formatting)))
}
