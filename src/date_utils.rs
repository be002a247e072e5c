use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::CalendarMonth;

/// Parse an upstream date in any of the shapes the data-access layer emits:
/// `YYYY-MM-DD`, an RFC 3339 timestamp, or a `YYYY-MM-DDTHH:MM:SS` prefix.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .filter(|_| raw.as_bytes().get(10) == Some(&b'T'))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Parse a trend month key (`YYYY-MM`, or a full date) into year and month.
pub fn parse_month_key(raw: &str) -> Option<(i32, CalendarMonth)> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_date(raw))?;
    CalendarMonth::from_number(date.month()).map(|m| (date.year(), m))
}

/// `dd.mm.yyyy` for table display; unparseable input is returned as-is.
pub fn format_display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
