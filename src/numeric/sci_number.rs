// ============================================================================
// Scientific Number
// Unsigned mantissa x 10^exponent value type
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::powers::shift_up;
use alloy_primitives::U256;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unsigned number in scientific notation: `mantissa × 10^exponent`.
///
/// A plain value: equality compares the two fields, not the magnitude, so
/// `(12, 0)` and `(1, 1)` are different values even though both are close
/// to ten. Only [`crate::engine::from_integer`] and the normalizing
/// operations produce canonical pairs; [`SciNumber::new`] stores what it is
/// given.
///
/// # Example
/// ```
/// use sci_number::prelude::*;
///
/// let a: SciNumber = "5e76".parse().unwrap();
/// let b = SciNumber::from(3u64);
///
/// let product = sci_number::mul(a, b).unwrap();
/// assert_eq!(product.to_string(), "15e76");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SciNumber {
    mantissa: U256,
    exponent: u64,
}

impl SciNumber {
    /// Zero (0e0)
    pub const ZERO: Self = Self::new(U256::ZERO, 0);

    /// One (1e0)
    pub const ONE: Self = Self::new(U256::from_limbs([1, 0, 0, 0]), 0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw `(mantissa, exponent)` pair without normalizing.
    #[inline]
    pub const fn new(mantissa: U256, exponent: u64) -> Self {
        Self { mantissa, exponent }
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only. The decimal must be a
    /// non-negative whole number; trailing fractional zeros are accepted.
    ///
    /// # Errors
    /// - `InvalidInput` if the value is negative
    /// - `PrecisionLoss` if the value has a fractional part
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::InvalidInput);
        }

        let d = d.normalize();
        if d.scale() > 0 {
            return Err(NumericError::PrecisionLoss);
        }

        let integer = u128::try_from(d.mantissa()).map_err(|_| NumericError::InvalidInput)?;
        Ok(crate::engine::from_integer(U256::from(integer)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Significant-digits part.
    #[inline]
    pub const fn mantissa(self) -> U256 {
        self.mantissa
    }

    /// Power of ten applied to the mantissa.
    #[inline]
    pub const fn exponent(self) -> u64 {
        self.exponent
    }

    /// Check if the magnitude is zero (any exponent).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.mantissa.is_zero()
    }

    /// Reconstruct the full magnitude `mantissa × 10^exponent`.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude does not fit in 256 bits.
    pub fn to_integer(self) -> NumericResult<U256> {
        shift_up(self.mantissa, self.exponent)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<U256> for SciNumber {
    fn from(value: U256) -> Self {
        crate::engine::from_integer(value)
    }
}

impl From<u128> for SciNumber {
    fn from(value: u128) -> Self {
        crate::engine::from_integer(U256::from(value))
    }
}

impl From<u64> for SciNumber {
    fn from(value: u64) -> Self {
        crate::engine::from_integer(U256::from(value))
    }
}

// Infallible operators for ergonomics (panic on failure - use the checked
// functions in production)
impl Add for SciNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        crate::engine::add(self, rhs).expect("SciNumber addition overflow")
    }
}

impl Sub for SciNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        crate::engine::sub(self, rhs).expect("SciNumber subtraction underflow")
    }
}

impl Mul for SciNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        crate::engine::mul(self, rhs).expect("SciNumber multiplication overflow")
    }
}

impl Div for SciNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        crate::engine::div(self, rhs).expect("SciNumber division failed")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for SciNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SciNumber({})", self)
    }
}

impl fmt::Display for SciNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn is_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl std::str::FromStr for SciNumber {
    type Err = NumericError;

    /// Parse `"<mantissa>"` or `"<mantissa>e<exponent>"` (decimal digits only).
    ///
    /// The pair is stored as written, without normalizing.
    ///
    /// # Examples
    /// - "42" -> 42e0
    /// - "5e76" -> 5e76
    /// - "12E3" -> 12e3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (mantissa_str, exponent_str) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, "0"),
        };

        if !is_decimal_digits(mantissa_str) || !is_decimal_digits(exponent_str) {
            return Err(NumericError::InvalidInput);
        }

        let mantissa =
            U256::from_str_radix(mantissa_str, 10).map_err(|_| NumericError::InvalidInput)?;
        let exponent = exponent_str
            .parse::<u64>()
            .map_err(|_| NumericError::InvalidInput)?;

        Ok(Self::new(mantissa, exponent))
    }
}

// ============================================================================
// Tests
// ============================================================================
