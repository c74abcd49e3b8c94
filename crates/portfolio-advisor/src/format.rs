//! Currency Formatting
//!
//! Display-time formatting only; computation stays in exact `Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a dollar amount as `$12,345.67`.
///
/// Rounds to cents half-even before formatting.
pub fn format_usd(amount: Decimal) -> String {
    let cents = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .abs();
    let sign = if amount.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{cents:.2}");
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{frac}")
}
