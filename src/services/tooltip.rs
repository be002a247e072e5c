//! Tooltip content for the interactive charts.
//!
//! The hover state is passed in by the caller; nothing here keeps it.

use crate::models::{
    Anchor, CashOutflowChart, Formatting, HoverState, HoverTarget, InvoiceTrendChart,
    TrendTooltip, VendorRanking, VendorTooltip,
};
use crate::services::invoice_trend::VALUE_SCALE;

/// Tooltip for the hovered trend month. Months without an observation get
/// none, even though they stay in the series.
pub fn trend_tooltip(
    chart: &InvoiceTrendChart,
    hover: &HoverState,
    formatting: &Formatting,
) -> Option<TrendTooltip> {
    let HoverTarget::Month(month) = hover.target()? else {
        return None;
    };
    let point = chart.point(month).filter(|p| p.has_observation)?;

    let title = match point.year {
        Some(year) => format!("{} {}", month.abbreviation(), year),
        None => month.abbreviation().to_string(),
    };

    Some(TrendTooltip {
        title,
        invoice_count: formatting.format_count(point.volume),
        total_spend: formatting.format_amount(point.value * VALUE_SCALE),
    })
}

/// Tooltip for the hovered vendor bar, positioned at its last anchor.
pub fn vendor_tooltip(
    ranking: &VendorRanking,
    hover: &HoverState,
    formatting: &Formatting,
) -> Option<VendorTooltip> {
    let HoverTarget::Vendor(rank) = hover.target()? else {
        return None;
    };
    let vendor = ranking.by_rank(rank)?;

    Some(VendorTooltip {
        vendor: vendor.vendor_name.clone(),
        amount: formatting.format_amount(vendor.total_spend),
        anchor: hover.anchor().unwrap_or_default(),
    })
}

/// Amount label for the hovered cash-outflow bar, e.g. `€45k`.
pub fn bucket_tooltip(
    chart: &CashOutflowChart,
    hover: &HoverState,
    formatting: &Formatting,
) -> Option<String> {
    let HoverTarget::Bucket(index) = hover.target()? else {
        return None;
    };
    chart
        .points
        .get(index)
        .map(|p| formatting.format_in_thousands(p.amount))
}

/// Anchor centred over the filled part of a vendor bar track.
pub fn bar_anchor(track_left: f64, track_top: f64, track_width: f64, width_percentage: f64) -> Anchor {
    let filled = track_width * (width_percentage / 100.0);
    Anchor {
        left: (track_left + filled.min(track_width) / 2.0).round(),
        top: track_top.round(),
    }
}
