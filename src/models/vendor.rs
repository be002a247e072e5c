use serde::{Deserialize, Serialize};

use super::{DataSource, DataWarning, NumericValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSpend {
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub total_spend: NumericValue,
}

impl VendorSpend {
    pub fn new(vendor_name: impl Into<String>, total_spend: impl Into<NumericValue>) -> Self {
        Self {
            vendor_name: vendor_name.into(),
            total_spend: total_spend.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedVendor {
    /// 1-based position after sorting by spend.
    pub rank: usize,
    pub vendor_name: String,
    pub total_spend: f64,
    /// Bar fill relative to the axis ceiling, within `0..=100`.
    pub width_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRanking {
    pub vendors: Vec<RankedVendor>,
    pub axis_max: f64,
    pub ticks: Vec<AxisTick>,
    pub source: DataSource,
    pub warnings: Vec<DataWarning>,
}

impl VendorRanking {
    pub fn by_rank(&self, rank: usize) -> Option<&RankedVendor> {
        self.vendors.iter().find(|v| v.rank == rank)
    }
}
