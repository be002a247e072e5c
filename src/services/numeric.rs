use tracing::warn;

use crate::models::{DataWarning, NumericValue};

/// Coerce an upstream numeric field to a finite `f64`.
///
/// Numeric-like text is trimmed and parsed. Anything that does not yield a
/// finite number becomes `0.0` and a `MalformedAmount` warning is recorded,
/// so NaN never reaches a chart or a formatted label.
pub fn coerce(value: &NumericValue, field: &str, warnings: &mut Vec<DataWarning>) -> f64 {
    let parsed = match value {
        NumericValue::Number(n) => Some(*n),
        NumericValue::Text(s) => s.trim().parse::<f64>().ok(),
        NumericValue::Missing | NumericValue::Other(_) => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => {
            let raw = value.raw();
            warn!(field = field, raw = %raw, "Malformed numeric value, using 0");
            warnings.push(DataWarning::MalformedAmount {
                field: field.to_string(),
                raw,
            });
            0.0
        }
    }
}

/// Coerce a count field; fractional input is rounded to the nearest integer.
pub fn coerce_count(value: &NumericValue, field: &str, warnings: &mut Vec<DataWarning>) -> i64 {
    coerce(value, field, warnings).round() as i64
}
