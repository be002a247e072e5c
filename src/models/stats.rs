use serde::{Deserialize, Serialize};

use super::{DataWarning, NumericValue};

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_spend: NumericValue,
    #[serde(default)]
    pub total_invoices: NumericValue,
    #[serde(default)]
    pub total_documents: NumericValue,
    #[serde(default)]
    pub average_invoice_value: NumericValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub subtitle: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatPanel {
    pub cards: Vec<StatCard>,
    pub warnings: Vec<DataWarning>,
}
