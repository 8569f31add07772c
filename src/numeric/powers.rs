// ============================================================================
// Powers of Ten
// Decimal digit shifting over 256-bit mantissas
// ============================================================================

use super::errors::{NumericError, NumericResult};
use alloy_primitives::U256;

/// Largest `k` for which `10^k` fits in a `U256` (10^77 < 2^256 < 10^78).
pub const MAX_POW10_DIGITS: u64 = 77;

/// Compute `10^digits`, or `None` if it does not fit in 256 bits.
pub fn pow10(digits: u64) -> Option<U256> {
    if digits > MAX_POW10_DIGITS {
        return None;
    }

    let ten = U256::from(10u8);
    let mut result = U256::from(1u8);
    for _ in 0..digits {
        result = result.checked_mul(ten)?;
    }
    Some(result)
}

/// Multiply `mantissa` by `10^digits`.
///
/// # Errors
/// Returns `Overflow` if either the power or the product exceeds 256 bits.
/// A zero mantissa never overflows.
#[inline]
pub fn shift_up(mantissa: U256, digits: u64) -> NumericResult<U256> {
    if mantissa.is_zero() {
        return Ok(U256::ZERO);
    }

    pow10(digits)
        .and_then(|scale| mantissa.checked_mul(scale))
        .ok_or(NumericError::Overflow)
}

/// Divide `mantissa` by `10^digits`, truncating.
///
/// Shifting past the width of a `U256` drops every digit and yields zero.
#[inline]
pub fn shift_down(mantissa: U256, digits: u64) -> U256 {
    match pow10(digits) {
        Some(scale) => mantissa / scale,
        None => U256::ZERO,
    }
}
