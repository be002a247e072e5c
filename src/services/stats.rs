use crate::models::{
    DashboardStats, DataWarning, Dataset, Formatting, NumericValue, StatCard, StatPanel,
};
use crate::services::fallback;
use crate::services::numeric::coerce;

/// Headline stat cards. Stats the upstream did not send render as zero; a
/// missing stats object is also recorded as `MissingData`.
pub fn stat_cards(stats: Option<&DashboardStats>, formatting: &Formatting) -> StatPanel {
    let mut warnings = Vec::new();
    if stats.is_none() {
        fallback::record_missing(Dataset::Stats, &mut warnings);
    }
    let stats = stats.cloned().unwrap_or_default();

    let total_spend = present_or_zero(&stats.total_spend, "totalSpend", &mut warnings);
    let total_invoices = present_or_zero(&stats.total_invoices, "totalInvoices", &mut warnings);
    let total_documents =
        present_or_zero(&stats.total_documents, "totalDocuments", &mut warnings);
    let average = present_or_zero(
        &stats.average_invoice_value,
        "averageInvoiceValue",
        &mut warnings,
    );

    let cards = vec![
        card("Total Spend", Some("(YTD)"), formatting.format_amount(total_spend)),
        card(
            "Total Invoices Processed",
            None,
            formatting.format_count(total_invoices.round() as i64),
        ),
        card(
            "Documents Uploaded",
            Some("This Month"),
            formatting.format_count(total_documents.round() as i64),
        ),
        card("Average Invoice Value", None, formatting.format_amount(average)),
    ];

    StatPanel { cards, warnings }
}

fn card(title: &str, subtitle: Option<&str>, value: String) -> StatCard {
    StatCard {
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
        value,
    }
}

// an absent stat is not malformed
fn present_or_zero(value: &NumericValue, field: &str, warnings: &mut Vec<DataWarning>) -> f64 {
    match value {
        NumericValue::Missing => 0.0,
        _ => coerce(value, field, warnings),
    }
}
