use crate::models::{CategoryChart, CategorySlice, CategorySpend, Dataset, Formatting};
use crate::services::fallback;
use crate::services::numeric::coerce;

pub const MAX_SLICES: usize = 3;
pub const PALETTE: [&str; 3] = ["#1f60ef", "#F99D6F", "#FED7AA"];

/// Donut slices for the first three categories in upstream order.
///
/// There is no substitute dataset: missing input gives an empty donut and a
/// `MissingData` warning.
pub fn slices(input: Option<&[CategorySpend]>, formatting: &Formatting) -> CategoryChart {
    let mut warnings = Vec::new();
    if fallback::is_missing(input) {
        fallback::record_missing(Dataset::CategorySpend, &mut warnings);
    }

    let picked: Vec<(String, f64)> = input
        .unwrap_or_default()
        .iter()
        .take(MAX_SLICES)
        .map(|c| (c.category.clone(), coerce(&c.spend, "spend", &mut warnings)))
        .collect();

    let total: f64 = picked.iter().map(|(_, v)| v).sum();

    let slices = picked
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let share = if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            };
            CategorySlice {
                name,
                value,
                color: PALETTE[i % PALETTE.len()].to_string(),
                share,
                share_label: formatting.format_percent(share),
            }
        })
        .collect();

    CategoryChart {
        slices,
        total,
        warnings,
    }
}
