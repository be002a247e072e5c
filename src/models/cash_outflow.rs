use serde::{Deserialize, Serialize};

use super::{DataSource, DataWarning, NumericValue};

/// One cash-outflow observation from upstream (`{month, amount}`).
///
/// The label is called `month` on the wire even though it usually carries a
/// due-date range such as `"8-30 days"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodAmount {
    #[serde(rename = "month", alias = "period", default)]
    pub period: String,
    #[serde(default)]
    pub amount: NumericValue,
}

impl PeriodAmount {
    pub fn new(period: impl Into<String>, amount: impl Into<NumericValue>) -> Self {
        Self {
            period: period.into(),
            amount: amount.into(),
        }
    }
}

/// Payment due-date aging buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgingBucket {
    #[serde(rename = "0-7 days")]
    UpToWeek,
    #[serde(rename = "8-30 days")]
    UpToMonth,
    #[serde(rename = "31-60 days")]
    UpToTwoMonths,
    #[serde(rename = "60+ days")]
    Beyond,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 4] = [
        Self::UpToWeek,
        Self::UpToMonth,
        Self::UpToTwoMonths,
        Self::Beyond,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToWeek => "0-7 days",
            Self::UpToMonth => "8-30 days",
            Self::UpToTwoMonths => "31-60 days",
            Self::Beyond => "60+ days",
        }
    }

    /// True when `period` is, or textually contains, this bucket's label.
    pub fn matches(&self, period: &str) -> bool {
        period.contains(self.label())
    }

    pub fn labels() -> [&'static str; 4] {
        Self::ALL.map(|b| b.label())
    }
}

/// Classification strategy the cash-outflow chart ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Output is the four aging buckets in canonical order.
    Bucketed,
    /// Labels were unrecognized; up to four records shown as delivered.
    PassThrough,
}

/// One bar of the cash-outflow chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketPoint {
    pub period: String,
    pub amount: f64,
    pub bucket: Option<AgingBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashOutflowChart {
    pub points: Vec<BucketPoint>,
    pub mode: ClassificationMode,
    pub source: DataSource,
    pub warnings: Vec<DataWarning>,
}
