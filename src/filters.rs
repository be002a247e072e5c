//! Number formatting for dashboard display strings.
//!
//! Amounts are rounded to cents before formatting so that float noise from
//! upstream never shows up in a label.
//!
//! Format: sign + currency symbol + number with thousands separator

/// Format an amount as `€1.234,56` (de-DE) or `$1,234.56` (en-US).
/// Negative amounts get a leading `-`, positive amounts no sign.
pub fn format_amount(amount: f64, currency: &str, locale: &str) -> String {
    let cents = to_cents(amount);
    let abs_cents = cents.unsigned_abs();
    let whole = abs_cents / 100;
    let fractional = abs_cents % 100;

    let (thousands_sep, decimal_sep) = locale_separators(locale);
    let whole_str = format_with_thousands(whole, thousands_sep);
    let symbol = currency_symbol(currency);
    let sign = if cents < 0 { "-" } else { "" };

    format!(
        "{}{}{}{}{:02}",
        sign, symbol, whole_str, decimal_sep, fractional
    )
}

/// Format an integer count with locale thousands separators.
pub fn format_count(count: i64, locale: &str) -> String {
    let (thousands_sep, _) = locale_separators(locale);
    let digits = format_with_thousands(count.unsigned_abs(), thousands_sep);
    if count < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Compact label for a raw amount: 15000 -> `€15k`.
pub fn format_thousands_label(amount: f64, currency: &str) -> String {
    let thousands = (amount / 1000.0).round() as i64;
    format!("{}{}k", currency_symbol(currency), thousands)
}

/// Label for a value that is already in thousands: 30 -> `€30k`, 12.5 -> `€12.5k`.
pub fn format_in_thousands(value: f64, currency: &str) -> String {
    format!("{}{}k", currency_symbol(currency), trim_decimals(value))
}

/// Value-axis tick label: plain below 1000, compact `k` form above.
pub fn format_axis_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else {
        trim_decimals(value)
    }
}

/// Unsigned percentage with two decimals and a locale decimal separator.
/// Example: 42.5 -> "42.50%" (en-US) or "42,50%" (de-DE)
pub fn format_percent(value: f64, locale: &str) -> String {
    let (_, decimal_sep) = locale_separators(locale);
    let hundredths = to_cents(value).unsigned_abs();
    format!(
        "{}{}{:02}%",
        hundredths / 100,
        decimal_sep,
        hundredths % 100
    )
}

fn to_cents(amount: f64) -> i64 {
    if amount.is_finite() {
        (amount * 100.0).round() as i64
    } else {
        0
    }
}

/// Display with at most two decimals and no trailing zeros.
fn trim_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

/// Get thousands and decimal separators based on locale.
fn locale_separators(locale: &str) -> (char, char) {
    match locale {
        "de-DE" | "de-AT" | "fr-FR" | "es-ES" | "it-IT" | "pt-BR" | "pt-PT" | "nl-NL"
        | "nl-BE" | "pl-PL" | "da-DK" | "nb-NO" | "sv-SE" | "fi-FI" | "cs-CZ" | "tr-TR" => {
            ('.', ',')
        }
        _ => (',', '.'),
    }
}

/// Format a non-negative number with thousands separators.
fn format_with_thousands(n: u64, sep: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

/// Get currency symbol for a currency code.
fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_uppercase().as_str() {
        "EUR" => "\u{20ac}",
        "USD" => "$",
        "GBP" => "\u{00a3}",
        "CHF" => "CHF\u{00a0}",
        "JPY" => "\u{00a5}",
        "SEK" | "NOK" | "DKK" => "kr\u{00a0}",
        "PLN" => "z\u{0142}\u{00a0}",
        _ => "",
    }
}
