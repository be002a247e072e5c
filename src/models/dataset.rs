use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream collections the dashboard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Stats,
    CashOutflow,
    InvoiceTrends,
    Vendors,
    CategorySpend,
    Invoices,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::CashOutflow => "cash_outflow",
            Self::InvoiceTrends => "invoice_trends",
            Self::Vendors => "vendors",
            Self::CategorySpend => "category_spend",
            Self::Invoices => "invoices",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a chart was built from live upstream data or from the fixed
/// substitute dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Live,
    Fallback,
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Data-quality diagnostics recorded while normalizing upstream input.
///
/// None of these abort a transform; each one records the substitute value
/// that was used in place of the bad input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWarning {
    /// Upstream collection was empty or absent; the fallback dataset was shown.
    MissingData { dataset: Dataset },
    /// A numeric field could not be parsed and was replaced by zero.
    MalformedAmount { field: String, raw: String },
    /// No cash-outflow label matched an aging bucket; records passed through.
    UnrecognizedLabels { count: usize },
    /// A trend record's month key was not `YYYY-MM`; the record was dropped.
    UnparseableMonth { raw: String },
    /// Two trend records mapped to the same calendar month; the later one won.
    DuplicateMonth { month: String },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingData { dataset } => {
                write!(f, "{} missing, showing fallback data", dataset)
            }
            Self::MalformedAmount { field, raw } => {
                write!(f, "malformed {} value '{}', using 0", field, raw)
            }
            Self::UnrecognizedLabels { count } => {
                write!(f, "{} cash outflow labels matched no aging bucket", count)
            }
            Self::UnparseableMonth { raw } => write!(f, "unparseable month key '{}'", raw),
            Self::DuplicateMonth { month } => write!(f, "duplicate records for {}", month),
        }
    }
}
