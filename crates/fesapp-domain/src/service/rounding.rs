//! Half-to-even rounding of fare amounts
//!
//! Two flavours exist because the fare components come from two kinds of value:
//!
//! - `round_half_even` rounds the exact binary value. A tie is only a tie when
//!   the stored value sits exactly on the midpoint, so 2.675 (stored slightly
//!   below) rounds to 2.67.
//! - `round_scaled_half_even` scales first and rounds the scaled product, so
//!   5993.695 (whose product 599369.5 is exact) rounds to 5993.7. Log-derived
//!   amounts (distance fare, subtotal, total) are rounded this way.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round the exact value of `value` to `decimals` places, ties to even.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        .and_then(decimal_to_f64)
        .unwrap_or(value)
}

/// Above this mantissa an `f64` can no longer hold every integer
const EXACT_MANTISSA_LIMIT: u128 = 1 << 53;

fn decimal_to_f64(d: Decimal) -> Option<f64> {
    // mantissa and 10^scale are both exact here, so the division rounds once
    if d.mantissa().unsigned_abs() < EXACT_MANTISSA_LIMIT && d.scale() <= 22 {
        Some(d.mantissa() as f64 / 10f64.powi(d.scale() as i32))
    } else {
        d.to_f64()
    }
}

/// Round `value * 10^decimals` to an integer, ties to even, and scale back.
///
/// Negative `decimals` round to tens, hundreds, ... (`-2` gives the nearest 100).
pub fn round_scaled_half_even(value: f64, decimals: i32) -> f64 {
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round_ties_even() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round_ties_even() * factor
    }
}

/// Nearest 100 currency units
pub fn round_to_nearest_hundred(value: f64) -> f64 {
    round_scaled_half_even(value, -2)
}
