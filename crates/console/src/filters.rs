//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format an amount as dollars with exactly two decimal places.
#[must_use]
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

/// Format an amount as dollars with exactly two decimal places.
///
/// Usage in templates: `{{ report.total_revenue|money }}`
#[askama::filter_fn]
pub fn money(value: &f64, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(*value))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_two_decimals() {
        assert_eq!(format_money(150.5), "$150.50");
        assert_eq!(format_money(25.0), "$25.00");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_money_rounds_subcent_amounts() {
        assert_eq!(format_money(19.999), "$20.00");
        assert_eq!(format_money(1234.5), "$1234.50");
    }
}
