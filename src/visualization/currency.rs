use num_format::{Locale, ToFormattedString};

use crate::models::CurrencySettings;

/// Insert thousands separators into the integer part of a fixed-point string.
fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };

    let grouped = match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Format a number with thousands separators and fixed decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    let body = group_thousands(&format!("{:.*}", decimals, value.abs()));
    // Avoid "-0.00"
    if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{body}")
    } else {
        body
    }
}

/// `$1,234.56`, with the sign ahead of the symbol for losses.
pub fn format_usd(value: f64) -> String {
    let body = format_number(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${body}"),
    }
}

/// USD amount converted and rendered in the local currency, e.g. `49,360.00 TRY`.
pub fn format_local(value_usd: f64, currency: &CurrencySettings) -> String {
    format!(
        "{} {}",
        format_number(currency.to_local(value_usd), 2),
        currency.local_code
    )
}

/// Payback years, or "never" when the farm makes no profit.
pub fn format_payback(payback_years: Option<f64>) -> String {
    match payback_years {
        Some(y) => format!("{y:.2} years"),
        None => "never (no profit)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000.5"), "100,000.5");
        assert_eq!(group_thousands("0.25"), "0.25");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(335000.0), "$335,000.00");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_usd_negative_zero() {
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn test_format_local() {
        let c = CurrencySettings::default();
        assert_eq!(format_local(1234.0, &c), "49,360.00 TRY");
        let eur = CurrencySettings {
            usd_to_local: 0.5,
            local_code: "EUR".to_string(),
        };
        assert_eq!(format_local(-10.0, &eur), "-5.00 EUR");
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(format_payback(Some(1.914)), "1.91 years");
        assert_eq!(format_payback(None), "never (no profit)");
    }

    #[test]
    fn test_format_number_decimals() {
        assert_eq!(format_number(22950.0, 0), "22,950");
        assert_eq!(format_number(410.958904, 1), "411.0");
        assert_eq!(format_number(410.958904, 2), "410.96");
        // Rounding carries into the grouped integer part
        assert_eq!(format_number(999_999.999, 2), "1,000,000.00");
        assert_eq!(format_number(-0.0, 2), "0.00");
    }
}
