use tracing::debug;

use crate::models::{DashboardSnapshot, DashboardView, Formatting};
use crate::services::{
    cash_outflow, category_share, invoice_table, invoice_trend, stats, vendor_ranking,
};

/// Build every widget's display structure from one upstream snapshot.
///
/// Each transform runs independently; a missing collection only affects its
/// own widget.
pub fn build(snapshot: &DashboardSnapshot, formatting: &Formatting) -> DashboardView {
    let view = DashboardView {
        stats: stats::stat_cards(snapshot.stats.as_ref(), formatting),
        cash_outflow: cash_outflow::classify(snapshot.cash_outflow.as_deref()),
        invoice_trend: invoice_trend::complete(snapshot.invoice_trends.as_deref()),
        top_vendors: vendor_ranking::rank_or_fallback(snapshot.vendors.as_deref(), formatting),
        category_spend: category_share::slices(snapshot.category_spend.as_deref(), formatting),
        invoices: invoice_table::rows(snapshot.invoices.as_deref(), formatting),
    };

    let fallbacks = [
        view.cash_outflow.source,
        view.invoice_trend.source,
        view.top_vendors.source,
        view.invoices.source,
    ]
    .iter()
    .filter(|source| source.is_fallback())
    .count();

    debug!(
        buckets = view.cash_outflow.points.len(),
        fallbacks,
        vendors = view.top_vendors.vendors.len(),
        invoices = view.invoices.rows.len(),
        warnings = view.warning_count(),
        "Dashboard view built"
    );

    view
}
