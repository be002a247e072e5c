use std::collections::HashMap;

use tracing::warn;

use crate::date_utils::parse_month_key;
use crate::filters::format_axis_value;
use crate::models::{
    AxisScale, CalendarMonth, DataSource, DataWarning, Dataset, InvoiceTrendChart, MonthlyMetric,
    TrendPoint, CALENDAR_FRAME,
};
use crate::services::fallback;
use crate::services::numeric::{coerce, coerce_count};
use crate::services::scale::{snapped_ceil, ticks};

/// Divisor applied to `value` so spend and invoice count share one axis.
pub const VALUE_SCALE: f64 = 1000.0;
/// Headroom above the observed peak.
pub const AXIS_HEADROOM: f64 = 1.2;
pub const AXIS_STEP: f64 = 20.0;
pub const AXIS_FLOOR: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct MonthSlot {
    year: i32,
    volume: i64,
    value: f64,
}

/// Shared ceiling for volume and rescaled value:
/// `max(80, ceil(raw_max * 1.2 / 20) * 20)`.
pub fn axis_max(raw_max: f64) -> f64 {
    let steps = snapped_ceil(raw_max * AXIS_HEADROOM / AXIS_STEP);
    (steps * AXIS_STEP).max(AXIS_FLOOR)
}

pub fn axis_scale(raw_max: f64) -> AxisScale {
    let max = axis_max(raw_max);
    let ticks = ticks(max, AXIS_STEP);
    let labels = ticks.iter().map(|t| format_axis_value(*t)).collect();
    AxisScale { max, ticks, labels }
}

/// Reindex partial monthly metrics onto the full Jan..Dec calendar frame.
///
/// Months without a record are zero-filled, so an absent or empty input
/// still produces twelve points; that zero-filled frame is this chart's
/// fallback. When two records land on the same month the later one wins.
pub fn complete(input: Option<&[MonthlyMetric]>) -> InvoiceTrendChart {
    let mut warnings = Vec::new();
    let records = input.unwrap_or_default();

    let source = if fallback::is_missing(input) {
        fallback::record_missing(Dataset::InvoiceTrends, &mut warnings);
        DataSource::Fallback
    } else {
        DataSource::Live
    };

    let mut lookup: HashMap<CalendarMonth, MonthSlot> = HashMap::new();
    for record in records {
        let Some((year, month)) = parse_month_key(&record.month) else {
            warn!(month = %record.month, "Unparseable trend month, dropping record");
            warnings.push(DataWarning::UnparseableMonth {
                raw: record.month.clone(),
            });
            continue;
        };

        let slot = MonthSlot {
            year,
            volume: coerce_count(&record.volume, "volume", &mut warnings),
            value: coerce(&record.value, "value", &mut warnings) / VALUE_SCALE,
        };

        if lookup.insert(month, slot).is_some() {
            warn!(month = month.abbreviation(), "Duplicate trend month, keeping later record");
            warnings.push(DataWarning::DuplicateMonth {
                month: month.abbreviation().to_string(),
            });
        }
    }

    let raw_max = lookup
        .values()
        .map(|slot| (slot.volume as f64).max(slot.value))
        .fold(0.0, f64::max);
    let axis = axis_scale(raw_max);

    let points = CALENDAR_FRAME
        .iter()
        .map(|month| {
            let slot = lookup.get(month);
            let volume = slot.map_or(0, |s| s.volume);
            let value = slot.map_or(0.0, |s| s.value);
            TrendPoint {
                month: *month,
                year: slot.map(|s| s.year),
                volume,
                value,
                axis_max: axis.max,
                ticks: axis.ticks.clone(),
                has_observation: volume != 0 || value != 0.0,
            }
        })
        .collect();

    InvoiceTrendChart {
        points,
        axis,
        source,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_slice(input: &[MonthlyMetric]) -> InvoiceTrendChart {
        complete(Some(input))
    }

    #[test]
    fn test_single_month() {
        let chart = complete_slice(&[MonthlyMetric::new("2025-02", 65.0, 55000.0)]);
        assert_eq!(chart.points.len(), 12);

        let feb = chart.point(CalendarMonth::Feb).unwrap();
        assert_eq!(feb.volume, 65);
        assert_eq!(feb.value, 55.0);
        assert_eq!(feb.year, Some(2025));
        assert!(feb.has_observation);

        for point in chart.points.iter().filter(|p| p.month != CalendarMonth::Feb) {
            assert_eq!(point.volume, 0);
            assert_eq!(point.value, 0.0);
            assert!(!point.has_observation);
        }
        assert_eq!(chart.axis.max, 80.0);
    }

    #[test]
    fn test_calendar_order() {
        let chart = complete_slice(&[
            MonthlyMetric::new("2025-11", 3.0, 1000.0),
            MonthlyMetric::new("2025-01", 1.0, 1000.0),
        ]);
        let months: Vec<&str> = chart.points.iter().map(|p| p.month.abbreviation()).collect();
        assert_eq!(
            months,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn test_empty_input_zero_fills() {
        let chart = complete(None);
        assert_eq!(chart.points.len(), 12);
        assert!(chart.points.iter().all(|p| !p.has_observation));
        assert_eq!(chart.axis.max, 80.0);
        assert_eq!(chart.source, DataSource::Fallback);
    }

    #[test]
    fn test_axis_scales_with_value() {
        // 250000 / 1000 = 250; 250 * 1.2 = 300 -> 300
        let chart = complete_slice(&[MonthlyMetric::new("2025-03", 40.0, 250000.0)]);
        assert_eq!(chart.axis.max, 300.0);
        assert_eq!(chart.axis.ticks.len(), 16);
        assert_eq!(chart.axis.ticks.last(), Some(&300.0));
    }

    #[test]
    fn test_axis_scales_with_volume() {
        // 101 * 1.2 = 121.2 -> 7 steps -> 140
        let chart = complete_slice(&[MonthlyMetric::new("2025-03", 101.0, 1000.0)]);
        assert_eq!(chart.axis.max, 140.0);
    }

    #[test]
    fn test_axis_metadata_on_every_point() {
        let chart = complete_slice(&[MonthlyMetric::new("2025-06", 10.0, 10000.0)]);
        assert!(chart
            .points
            .iter()
            .all(|p| p.axis_max == chart.axis.max && p.ticks == chart.axis.ticks));
        assert_eq!(chart.axis.ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_eq!(chart.axis.labels, vec!["0", "20", "40", "60", "80"]);
    }

    #[test]
    fn test_huge_value_keeps_ticks_bounded() {
        // 1e10 / 1000 = 1e7; axis 1.2e7 would be 600000 steps of 20
        let chart = complete_slice(&[MonthlyMetric::new("2025-02", 1.0, 1.0e10)]);
        assert_eq!(chart.axis.max, 12_000_000.0);
        assert_eq!(chart.axis.ticks.len(), 21);
        assert_eq!(chart.axis.labels.last().map(String::as_str), Some("12000k"));
        assert!(chart.points.iter().all(|p| p.ticks.len() == 21));
    }

    #[test]
    fn test_absurd_value_does_not_panic() {
        for value in [1.0e30, 1.0e300, f64::MAX] {
            let chart = complete_slice(&[MonthlyMetric::new("2025-02", 1.0, value)]);
            assert!(chart.axis.max.is_finite());
            assert!(chart.axis.ticks.len() <= 21);
            assert!(chart.axis.ticks.iter().all(|t| t.is_finite()));
        }
    }

    #[test]
    fn test_huge_negative_volume() {
        let chart = complete_slice(&[MonthlyMetric::new("2025-03", -1.0e30, 0.0)]);
        let mar = chart.point(CalendarMonth::Mar).unwrap();
        assert_eq!(mar.volume, i64::MIN);
        assert_eq!(chart.axis.max, 80.0);
    }

    #[test]
    fn test_axis_max_floor() {
        assert_eq!(axis_max(0.0), 80.0);
        assert_eq!(axis_max(50.0), 80.0);
        assert_eq!(axis_max(100.0), 120.0);
    }

    #[test]
    fn test_unparseable_month_dropped() {
        let chart = complete_slice(&[
            MonthlyMetric::new("sometime", 99.0, 1000.0),
            MonthlyMetric::new("2025-04", 5.0, 2000.0),
        ]);
        assert_eq!(chart.points.len(), 12);
        assert_eq!(chart.point(CalendarMonth::Apr).unwrap().volume, 5);
        assert!(chart.warnings.contains(&DataWarning::UnparseableMonth {
            raw: "sometime".into()
        }));
        assert_eq!(chart.axis.max, 80.0);
    }

    #[test]
    fn test_duplicate_month_later_wins() {
        let chart = complete_slice(&[
            MonthlyMetric::new("2024-05", 10.0, 1000.0),
            MonthlyMetric::new("2025-05", 20.0, 3000.0),
        ]);
        let may = chart.point(CalendarMonth::May).unwrap();
        assert_eq!(may.volume, 20);
        assert_eq!(may.year, Some(2025));
        assert_eq!(
            chart.warnings,
            vec![DataWarning::DuplicateMonth {
                month: "May".into()
            }]
        );
    }

    #[test]
    fn test_malformed_value_is_zero() {
        let chart = complete_slice(&[MonthlyMetric::new("2025-02", 12.0, "abc")]);
        let feb = chart.point(CalendarMonth::Feb).unwrap();
        assert_eq!(feb.value, 0.0);
        assert_eq!(feb.volume, 12);
        assert!(feb.has_observation);
    }

    #[test]
    fn test_zero_record_has_no_observation() {
        let chart = complete_slice(&[MonthlyMetric::new("2025-08", 0.0, 0.0)]);
        let aug = chart.point(CalendarMonth::Aug).unwrap();
        assert_eq!(aug.year, Some(2025));
        assert!(!aug.has_observation);
    }
}
