use serde::{Deserialize, Serialize};

/// A numeric field as delivered by the data-access layer.
///
/// Amounts regularly arrive as numeric-like strings (`"1234.50"`), and some
/// rows omit the field entirely, so the raw shape is kept until a transform
/// coerces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl NumericValue {
    /// Raw representation used in diagnostics.
    pub fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Missing => "null".into(),
            Self::Other(v) => v.to_string(),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
