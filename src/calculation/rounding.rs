//! Money rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in every reported amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a full-precision amount to cents, halves away from zero.
///
/// Returns `None` when the amount is too large to carry two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").ok());
/// assert_eq!(round_money(Decimal::from_str("7").unwrap()).unwrap().to_string(), "7.00");
/// assert_eq!(round_money(Decimal::MAX), None);
/// ```
pub fn round_money(amount: Decimal) -> Option<Decimal> {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // rescale stops short of the requested scale when the mantissa would overflow
    rounded.rescale(MONEY_DECIMAL_PLACES);
    (rounded.scale() == MONEY_DECIMAL_PLACES).then_some(rounded)
}
