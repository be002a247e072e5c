use serde::{Deserialize, Serialize};

use super::{DataSource, DataWarning, NumericValue};

/// One invoice-trend observation from upstream (`{month: "YYYY-MM", volume, value}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetric {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub volume: NumericValue,
    #[serde(default)]
    pub value: NumericValue,
}

impl MonthlyMetric {
    pub fn new(
        month: impl Into<String>,
        volume: impl Into<NumericValue>,
        value: impl Into<NumericValue>,
    ) -> Self {
        Self {
            month: month.into(),
            volume: volume.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarMonth {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// The fixed Jan..Dec skeleton every trend series is reindexed onto.
pub const CALENDAR_FRAME: [CalendarMonth; 12] = [
    CalendarMonth::Jan,
    CalendarMonth::Feb,
    CalendarMonth::Mar,
    CalendarMonth::Apr,
    CalendarMonth::May,
    CalendarMonth::Jun,
    CalendarMonth::Jul,
    CalendarMonth::Aug,
    CalendarMonth::Sep,
    CalendarMonth::Oct,
    CalendarMonth::Nov,
    CalendarMonth::Dec,
];

impl CalendarMonth {
    /// Month from its 1-based calendar number.
    pub fn from_number(number: u32) -> Option<Self> {
        CALENDAR_FRAME.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }
}

/// Shared value-axis metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScale {
    pub max: f64,
    pub ticks: Vec<f64>,
    /// Display labels for `ticks`, e.g. `80` or `2k`.
    pub labels: Vec<String>,
}

/// One calendar slot of the trend chart. `value` is in thousands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: CalendarMonth,
    /// Year of the upstream record that filled this slot, if any.
    pub year: Option<i32>,
    pub volume: i64,
    pub value: f64,
    pub axis_max: f64,
    pub ticks: Vec<f64>,
    /// False when both volume and value are zero; such slots stay in the
    /// series but get no point-level tooltip emphasis.
    pub has_observation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceTrendChart {
    pub points: Vec<TrendPoint>,
    pub axis: AxisScale,
    pub source: DataSource,
    pub warnings: Vec<DataWarning>,
}

impl InvoiceTrendChart {
    pub fn point(&self, month: CalendarMonth) -> Option<&TrendPoint> {
        self.points.iter().find(|p| p.month == month)
    }
}
