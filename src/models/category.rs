use serde::{Deserialize, Serialize};

use super::{DataWarning, NumericValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub spend: NumericValue,
}

impl CategorySpend {
    pub fn new(category: impl Into<String>, spend: impl Into<NumericValue>) -> Self {
        Self {
            category: category.into(),
            spend: spend.into(),
        }
    }
}

/// One donut slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Percentage of the displayed total.
    pub share: f64,
    pub share_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub slices: Vec<CategorySlice>,
    pub total: f64,
    pub warnings: Vec<DataWarning>,
}
