//! Currency rounding and localized amount parsing.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half-up.
///
/// Applied at the point of return of every derived figure, never during
/// intermediate computation.
///
/// # Example
///
/// ```
/// use vigencia_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("11.3636363636").unwrap();
/// assert_eq!(round_currency(raw), Decimal::from_str("11.36").unwrap());
/// let half = Decimal::from_str("10.905").unwrap();
/// assert_eq!(round_currency(half), Decimal::from_str("10.91").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a masked pt-BR currency string into a decimal amount.
///
/// Masked inputs carry their value in centavos once separators are stripped:
/// `"1.000,00"` becomes `100000` digits, i.e. `1000.00`. Every non-digit
/// character is discarded and the digit string is scaled by 100. Returns
/// `None` for input with no digits at all.
///
/// # Example
///
/// ```
/// use vigencia_engine::calculation::parse_localized_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = parse_localized_amount("1.000,00").unwrap();
/// assert_eq!(amount, Decimal::from_str("1000.00").unwrap());
/// assert!(parse_localized_amount("abc").is_none());
/// ```
pub fn parse_localized_amount(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let cents: i128 = digits.parse().ok()?;
    Decimal::try_from_i128_with_scale(cents, 2).ok()
}
