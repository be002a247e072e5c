use crate::date_utils::format_display_date;
use crate::models::{DataSource, Dataset, Formatting, Invoice, InvoiceRow, InvoiceTable};
use crate::services::fallback;
use crate::services::numeric::coerce;

/// Rows for the "Invoices by Vendor" table, in upstream order.
pub fn rows(input: Option<&[Invoice]>, formatting: &Formatting) -> InvoiceTable {
    let mut warnings = Vec::new();

    let (invoices, source) = if fallback::is_missing(input) {
        fallback::record_missing(Dataset::Invoices, &mut warnings);
        (fallback::invoice_fallback(), DataSource::Fallback)
    } else {
        (input.unwrap_or_default().to_vec(), DataSource::Live)
    };

    let rows = invoices
        .iter()
        .map(|invoice| {
            let value = coerce(&invoice.amount, "amount", &mut warnings);
            InvoiceRow {
                vendor: invoice.vendor.clone(),
                date: format_display_date(&invoice.date),
                value,
                formatted_value: formatting.format_amount(value),
            }
        })
        .collect();

    InvoiceTable {
        rows,
        source,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NumericValue;

    fn invoice(vendor: &str, date: &str, amount: NumericValue) -> Invoice {
        Invoice {
            vendor: vendor.into(),
            date: date.into(),
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_formatted() {
        let input = vec![invoice("Prunix GmbH", "2025-08-19", NumericValue::Number(1240.5))];
        let table = rows(Some(input.as_slice()), &Formatting::default());
        assert_eq!(table.rows[0].date, "19.08.2025");
        assert_eq!(table.rows[0].formatted_value, "\u{20ac}1.240,50");
        assert_eq!(table.source, DataSource::Live);
    }

    #[test]
    fn test_fallback_table() {
        let table = rows(None, &Formatting::default());
        assert_eq!(table.rows.len(), 10);
        assert_eq!(table.source, DataSource::Fallback);
        assert_eq!(table.rows[1].date, "01.03.2024");
    }

    #[test]
    fn test_bad_date_and_amount() {
        let input = vec![invoice("X", "soon", NumericValue::from("n/a"))];
        let table = rows(Some(input.as_slice()), &Formatting::default());
        assert_eq!(table.rows[0].date, "soon");
        assert_eq!(table.rows[0].value, 0.0);
        assert_eq!(table.warnings.len(), 1);
    }

    #[test]
    fn test_extreme_amount_does_not_overflow() {
        let input = vec![invoice("Prunix GmbH", "2025-08-19", NumericValue::Number(-1.0e30))];
        let table = rows(Some(input.as_slice()), &Formatting::default());
        assert_eq!(
            table.rows[0].formatted_value,
            "-\u{20ac}92.233.720.368.547.758,08"
        );
    }
}
