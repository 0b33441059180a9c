use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Abbreviated French month names, as the original form UI displays them.
const MONTHS_FR: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.",
    "Déc.",
];

/// Convert a stored `YYYY-MM-DD` date into its display form, e.g.
/// `2004-04-04` -> `4 Avr. 04`.
///
/// Fails on anything that does not parse as a calendar date; callers decide
/// how to guard (the list presenter falls back to the raw string).
pub fn format_date(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(raw.to_string()))?;
    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {} {:02}", date.day(), month, date.year() % 100))
}

/// Amounts render as given, with the currency suffix. Whole amounts drop the
/// decimal part.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} €", amount as i64)
    } else {
        format!("{:.2} €", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_french_short_form() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2022-12-31").unwrap(), "31 Déc. 22");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert!(format_date("not-a-date").is_err());
        assert!(format_date("2004-13-01").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn test_format_date_rejects_impossible_days() {
        assert!(format_date("2021-02-30").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(400.0), "400 €");
        assert_eq!(format_amount(348.5), "348.50 €");
    }
}
