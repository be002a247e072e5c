use crate::filters;
use serde::{Deserialize, Serialize};

/// Locale and currency used for every display string the dashboard emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatting {
    pub locale: String,
    pub currency: String,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            locale: "de-DE".into(),
            currency: "EUR".into(),
        }
    }
}

impl Formatting {
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
        }
    }

    /// Format a monetary amount with two decimals, e.g. `€1.234,56` for de-DE.
    pub fn format_amount(&self, amount: f64) -> String {
        filters::format_amount(amount, &self.currency, &self.locale)
    }

    /// Format an integer count with thousands separators.
    pub fn format_count(&self, count: i64) -> String {
        filters::format_count(count, &self.locale)
    }

    /// Compact thousands label for axis ticks, e.g. `€15k`.
    pub fn format_thousands_label(&self, amount: f64) -> String {
        filters::format_thousands_label(amount, &self.currency)
    }

    /// Label for a value already expressed in thousands, e.g. `€30k`.
    pub fn format_in_thousands(&self, value: f64) -> String {
        filters::format_in_thousands(value, &self.currency)
    }

    pub fn format_percent(&self, value: f64) -> String {
        filters::format_percent(value, &self.locale)
    }
}
