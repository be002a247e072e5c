use serde::{Deserialize, Serialize};

use super::{DataSource, DataWarning, NumericValue};

/// Invoice listing row as delivered by the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub invoice_id: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: NumericValue,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub vendor: String,
    /// `dd.mm.yyyy`, or the upstream text when it is not a date.
    pub date: String,
    pub value: f64,
    pub formatted_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceTable {
    pub rows: Vec<InvoiceRow>,
    pub source: DataSource,
    pub warnings: Vec<DataWarning>,
}
