//! Exact decimal helpers - no unwrap, no panics

use rust_decimal::{Decimal, RoundingStrategy};

use crate::state::{Amount, Hours};

/// Upper bound of a percentage
pub const MAX_PERCENTAGE: u8 = 100;

/// Clamp a percentage into [0, 100]
pub fn clamp_percentage(pct: u8) -> u8 {
    if pct > MAX_PERCENTAGE {
        MAX_PERCENTAGE
    } else {
        pct
    }
}

/// Add with saturation
pub fn add_dec(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_add(b)
}

/// Subtract with saturation
pub fn sub_dec(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_sub(b)
}

/// `a * b / c`, or 0 when `c` is not positive
///
/// Multiplies before dividing so whole-cent inputs stay exact wherever the
/// quotient is representable.
pub fn mul_div(a: Decimal, b: Decimal, c: Decimal) -> Decimal {
    if c <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    a.saturating_mul(b).checked_div(c).unwrap_or(Decimal::ZERO)
}

/// `part / whole`, or 0 when `whole` is not positive
pub fn ratio_or_zero(part: Decimal, whole: Decimal) -> Decimal {
    mul_div(part, Decimal::ONE, whole)
}

/// `amount * pct / 100` (exact for amounts with up to 26 decimal places)
pub fn percent_of(amount: Amount, pct: u8) -> Amount {
    mul_div(amount, Decimal::from(pct), Decimal::ONE_HUNDRED)
}

/// Sum of hours over an iterator
pub fn sum_hours<I>(hours: I) -> Hours
where
    I: IntoIterator<Item = Hours>,
{
    hours.into_iter().fold(Decimal::ZERO, add_dec)
}

/// `|a - b| < tolerance`
pub fn approx_eq(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    sub_dec(a, b).abs() < tolerance
}

/// Round to `dp` places, halves away from zero
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-point text with exactly `dp` places, halves rounded away from zero
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = round_half_up(value, dp);
    rounded.rescale(dp);
    rounded.to_string()
}
