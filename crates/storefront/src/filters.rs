//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Format a decimal amount as money, rounded to 2 decimal places.
///
/// Display rounding only - the calculator itself never rounds.
///
/// Usage in templates: `{{ summary.total|money }}`
#[askama::filter_fn]
pub fn money(amount: &Decimal, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(amount))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Render a 1-5 rating as filled/empty stars.
///
/// Usage in templates: `{{ product.comfort_rating_on_5|stars }}`
#[askama::filter_fn]
pub fn stars(rating: &f32, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_stars(*rating))
}

fn format_money(amount: &Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn format_stars(rating: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    let mut out = String::with_capacity(5 * 3);
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_for_display_only() {
        // round_dp is banker's rounding: .505 lands on the even neighbor
        assert_eq!(format_money(&"297.505".parse().unwrap()), "$297.50");
        assert_eq!(format_money(&"15".parse().unwrap()), "$15.00");
        assert_eq!(format_money(&"1.2987".parse().unwrap()), "$1.30");
    }

    #[test]
    fn test_stars_clamped_to_range() {
        assert_eq!(format_stars(4.0), "★★★★☆");
        assert_eq!(format_stars(0.0), "☆☆☆☆☆");
        assert_eq!(format_stars(9.0), "★★★★★");
    }
}
