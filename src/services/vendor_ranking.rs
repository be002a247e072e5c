use crate::models::{
    AxisTick, DataSource, Dataset, Formatting, RankedVendor, VendorRanking, VendorSpend,
};
use crate::services::fallback;
use crate::services::numeric::coerce;
use crate::services::scale::{divisions, snapped_ceil};

pub const TOP_N: usize = 10;
/// 10% headroom so the longest bar stops short of the track edge.
pub const SPEND_HEADROOM: f64 = 1.1;
/// Number of axis segments between the tick labels.
pub const TICK_SEGMENTS: usize = 3;

/// `max(1, ceil(max_spend * 1.1))`; the floor of 1 keeps widths finite when
/// every spend is zero.
pub fn axis_max(max_spend: f64) -> f64 {
    let ceiling = snapped_ceil(max_spend * SPEND_HEADROOM);
    if ceiling.is_finite() {
        ceiling.max(1.0)
    } else {
        // headroom overflowed near f64::MAX
        max_spend.max(1.0)
    }
}

/// Rank vendors by spend, keep the top ten, and compute bar widths.
///
/// The sort is stable, so vendors with equal spend keep their upstream order.
/// Output length is `min(10, input.len())`.
pub fn rank(input: &[VendorSpend], formatting: &Formatting) -> VendorRanking {
    let mut warnings = Vec::new();

    let mut vendors: Vec<(String, f64)> = input
        .iter()
        .map(|v| {
            (
                v.vendor_name.clone(),
                coerce(&v.total_spend, "totalSpend", &mut warnings),
            )
        })
        .collect();
    vendors.sort_by(|a, b| b.1.total_cmp(&a.1));
    vendors.truncate(TOP_N);

    let max_spend = vendors.first().map_or(0.0, |(_, spend)| *spend);
    let axis_max = axis_max(max_spend);

    let vendors = vendors
        .into_iter()
        .enumerate()
        .map(|(i, (vendor_name, total_spend))| RankedVendor {
            rank: i + 1,
            vendor_name,
            total_spend,
            width_percentage: (total_spend / axis_max * 100.0).clamp(0.0, 100.0),
        })
        .collect();

    VendorRanking {
        vendors,
        axis_max,
        ticks: axis_ticks(axis_max, formatting),
        source: DataSource::Live,
        warnings,
    }
}

/// Rank the upstream vendors, substituting the fixed ten-vendor sample when
/// the collection is empty or absent.
pub fn rank_or_fallback(input: Option<&[VendorSpend]>, formatting: &Formatting) -> VendorRanking {
    if !fallback::is_missing(input) {
        return rank(input.unwrap_or_default(), formatting);
    }

    let mut ranking = rank(&fallback::vendor_fallback(), formatting);
    ranking.source = DataSource::Fallback;
    fallback::record_missing(Dataset::Vendors, &mut ranking.warnings);
    ranking
}

/// Tick labels derived from the computed ceiling, so labels and bar widths
/// always share one scale.
pub fn axis_ticks(axis_max: f64, formatting: &Formatting) -> Vec<AxisTick> {
    divisions(axis_max, TICK_SEGMENTS)
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: formatting.format_thousands_label(value),
        })
        .collect()
}
