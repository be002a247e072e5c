use tracing::debug;

use crate::models::{
    AgingBucket, BucketPoint, CashOutflowChart, ClassificationMode, DataSource, DataWarning,
    Dataset, PeriodAmount,
};
use crate::services::fallback::{self, bucket_placeholder};
use crate::services::numeric::coerce;

/// Most bars the cash-outflow chart shows in pass-through mode.
pub const MAX_PASS_THROUGH: usize = 4;

/// Classify cash-outflow records into the four aging buckets.
///
/// If any label contains a bucket label the output is exactly the four
/// buckets in canonical order, with the first matching record supplying each
/// amount and the placeholder amount filling any bucket nothing matched.
/// Unrecognized labels are shown as delivered, at most four of them.
/// Missing input yields the placeholder set.
pub fn classify(input: Option<&[PeriodAmount]>) -> CashOutflowChart {
    let mut warnings = Vec::new();

    if fallback::is_missing(input) {
        fallback::record_missing(Dataset::CashOutflow, &mut warnings);
        return CashOutflowChart {
            points: placeholder_points(),
            mode: ClassificationMode::Bucketed,
            source: DataSource::Fallback,
            warnings,
        };
    }

    let incoming: Vec<(&str, f64)> = input
        .unwrap_or_default()
        .iter()
        .map(|r| (r.period.as_str(), coerce(&r.amount, "amount", &mut warnings)))
        .collect();

    let has_bucket_labels = incoming
        .iter()
        .any(|(period, _)| AgingBucket::ALL.iter().any(|b| b.matches(period)));

    if has_bucket_labels {
        let points = AgingBucket::ALL
            .iter()
            .map(|bucket| {
                let amount = incoming
                    .iter()
                    .find(|(period, _)| bucket.matches(period))
                    .map(|(_, amount)| *amount)
                    .unwrap_or_else(|| bucket_placeholder(*bucket));
                BucketPoint {
                    period: bucket.label().to_string(),
                    amount,
                    bucket: Some(*bucket),
                }
            })
            .collect();

        return CashOutflowChart {
            points,
            mode: ClassificationMode::Bucketed,
            source: DataSource::Live,
            warnings,
        };
    }

    debug!(
        count = incoming.len(),
        "No aging bucket labels in cash outflow, passing records through"
    );
    warnings.push(DataWarning::UnrecognizedLabels {
        count: incoming.len(),
    });

    let points = incoming
        .into_iter()
        .take(MAX_PASS_THROUGH)
        .map(|(period, amount)| BucketPoint {
            period: period.to_string(),
            amount,
            bucket: None,
        })
        .collect();

    CashOutflowChart {
        points,
        mode: ClassificationMode::PassThrough,
        source: DataSource::Live,
        warnings,
    }
}

fn placeholder_points() -> Vec<BucketPoint> {
    AgingBucket::ALL
        .iter()
        .map(|bucket| BucketPoint {
            period: bucket.label().to_string(),
            amount: bucket_placeholder(*bucket),
            bucket: Some(*bucket),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(chart: &CashOutflowChart) -> Vec<&str> {
        chart.points.iter().map(|p| p.period.as_str()).collect()
    }

    fn amounts(chart: &CashOutflowChart) -> Vec<f64> {
        chart.points.iter().map(|p| p.amount).collect()
    }

    #[test]
    fn test_empty_input_uses_placeholders() {
        let empty: Vec<PeriodAmount> = Vec::new();
        let chart = classify(Some(empty.as_slice()));
        assert_eq!(periods(&chart), AgingBucket::labels().to_vec());
        assert_eq!(amounts(&chart), vec![30.0, 45.0, 25.0, 60.0]);
        assert_eq!(chart.source, DataSource::Fallback);
        assert_eq!(
            chart.warnings,
            vec![DataWarning::MissingData {
                dataset: Dataset::CashOutflow
            }]
        );
    }

    #[test]
    fn test_absent_input_uses_placeholders() {
        let chart = classify(None);
        assert_eq!(amounts(&chart), vec![30.0, 45.0, 25.0, 60.0]);
    }

    #[test]
    fn test_buckets_reordered_canonically() {
        let input = vec![
            PeriodAmount::new("60+ days", 12.0),
            PeriodAmount::new("0-7 days", 3.0),
            PeriodAmount::new("31-60 days", 7.0),
            PeriodAmount::new("8-30 days", 5.0),
        ];
        let chart = classify(Some(input.as_slice()));
        assert_eq!(chart.mode, ClassificationMode::Bucketed);
        assert_eq!(periods(&chart), AgingBucket::labels().to_vec());
        assert_eq!(amounts(&chart), vec![3.0, 5.0, 7.0, 12.0]);
        assert!(chart.warnings.is_empty());
    }

    #[test]
    fn test_missing_buckets_get_placeholder() {
        let input = vec![PeriodAmount::new("Due in 8-30 days", "18.5")];
        let chart = classify(Some(input.as_slice()));
        assert_eq!(periods(&chart), AgingBucket::labels().to_vec());
        assert_eq!(amounts(&chart), vec![30.0, 18.5, 25.0, 60.0]);
        assert_eq!(chart.source, DataSource::Live);
    }

    #[test]
    fn test_first_match_wins() {
        let input = vec![
            PeriodAmount::new("0-7 days", 1.0),
            PeriodAmount::new("0-7 days (overdue)", 2.0),
        ];
        let chart = classify(Some(input.as_slice()));
        assert_eq!(chart.points[0].amount, 1.0);
    }

    #[test]
    fn test_unrecognized_labels_pass_through() {
        let input: Vec<PeriodAmount> = ["2025-01", "2025-02", "2025-03", "2025-04", "2025-05"]
            .iter()
            .enumerate()
            .map(|(i, m)| PeriodAmount::new(*m, i as f64))
            .collect();
        let chart = classify(Some(input.as_slice()));
        assert_eq!(chart.mode, ClassificationMode::PassThrough);
        assert_eq!(
            periods(&chart),
            vec!["2025-01", "2025-02", "2025-03", "2025-04"]
        );
        assert!(chart.points.iter().all(|p| p.bucket.is_none()));
        assert_eq!(chart.warnings, vec![DataWarning::UnrecognizedLabels { count: 5 }]);
    }

    #[test]
    fn test_malformed_amount_is_zero() {
        let input = vec![PeriodAmount::new("0-7 days", "lots")];
        let chart = classify(Some(input.as_slice()));
        assert_eq!(chart.points[0].amount, 0.0);
        assert!(matches!(
            chart.warnings[0],
            DataWarning::MalformedAmount { .. }
        ));
    }

    #[test]
    fn test_output_never_exceeds_four() {
        let input: Vec<PeriodAmount> = (0..20)
            .map(|i| PeriodAmount::new(format!("label {}", i), i as f64))
            .collect();
        assert!(classify(Some(input.as_slice())).points.len() <= 4);

        let mut bucketed = input.clone();
        bucketed.push(PeriodAmount::new("60+ days", 1.0));
        assert_eq!(classify(Some(bucketed.as_slice())).points.len(), 4);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![PeriodAmount::new("8-30 days", 9.0)];
        assert_eq!(classify(Some(input.as_slice())), classify(Some(input.as_slice())));
    }
}
