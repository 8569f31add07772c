// ============================================================================
// Scientific Engine
// Normalization and the four exponent-aligned operations
// ============================================================================

use crate::domain::EngineConfig;
use crate::numeric::powers::{pow10, shift_down, shift_up};
use crate::numeric::{NumericError, NumericResult, SciNumber, U256};
use std::cmp::Ordering;

/// Operands brought to a common exponent for `add`/`sub`.
enum Alignment {
    /// The smaller-exponent operand is below the precision floor
    Negligible(SciNumber),
    Aligned {
        lhs: U256,
        rhs: U256,
        exponent: u64,
    },
}

/// Stateless arithmetic engine over [`SciNumber`] values.
///
/// Every operation is a pure function of its operands and the engine's
/// thresholds; an engine can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ScientificEngine {
    config: EngineConfig,

    /// 10^normalize_ceiling_digits
    normalize_ceiling: U256,

    /// 10^conversion_ceiling_digits
    conversion_ceiling: U256,
}

impl ScientificEngine {
    /// Create an engine from a configuration.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the configuration does not validate.
    pub fn new(config: EngineConfig) -> NumericResult<Self> {
        if let Err(reason) = config.validate() {
            tracing::debug!("Rejected engine configuration: {}", reason);
            return Err(NumericError::InvalidInput);
        }

        let normalize_ceiling = pow10(u64::from(config.normalize_ceiling_digits))
            .ok_or(NumericError::InvalidInput)?;
        let conversion_ceiling = pow10(u64::from(config.conversion_ceiling_digits))
            .ok_or(NumericError::InvalidInput)?;

        Ok(Self {
            config,
            normalize_ceiling,
            conversion_ceiling,
        })
    }

    /// Engine with the reference thresholds (see [`EngineConfig::reference`]).
    pub fn reference() -> Self {
        let config = EngineConfig::reference();
        Self {
            config,
            normalize_ceiling: U256::from(10u128.pow(config.normalize_ceiling_digits)),
            conversion_ceiling: U256::from(10u128.pow(config.conversion_ceiling_digits)),
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Reduce the mantissa to at most `10^normalize_ceiling_digits`.
    ///
    /// Each step drops the lowest decimal digit and bumps the exponent.
    /// A mantissa equal to the ceiling is left as is. Idempotent.
    ///
    /// # Errors
    /// Returns `Overflow` if the exponent would exceed `u64::MAX`.
    pub fn normalize(&self, x: SciNumber) -> NumericResult<SciNumber> {
        let ten = U256::from(10u8);
        let mut mantissa = x.mantissa();
        let mut exponent = x.exponent();

        while mantissa > self.normalize_ceiling {
            mantissa /= ten;
            exponent = exponent.checked_add(1).ok_or_else(|| {
                tracing::debug!("Exponent overflow while normalizing {}", x);
                NumericError::Overflow
            })?;
        }

        if exponent != x.exponent() {
            tracing::trace!(
                dropped_digits = exponent - x.exponent(),
                "Normalized {} to {}e{}",
                x,
                mantissa,
                exponent
            );
        }

        Ok(SciNumber::new(mantissa, exponent))
    }

    /// Convert a plain integer, reducing it to at most
    /// `10^conversion_ceiling_digits`.
    pub fn from_integer(&self, value: U256) -> SciNumber {
        let ten = U256::from(10u8);
        let mut mantissa = value;
        let mut exponent = 0u64;

        while mantissa > self.conversion_ceiling {
            mantissa /= ten;
            exponent += 1;
        }

        SciNumber::new(mantissa, exponent)
    }

    // ========================================================================
    // Exponent Alignment
    // ========================================================================

    fn align(&self, a: SciNumber, b: SciNumber) -> Alignment {
        match a.exponent().cmp(&b.exponent()) {
            Ordering::Equal => Alignment::Aligned {
                lhs: a.mantissa(),
                rhs: b.mantissa(),
                exponent: a.exponent(),
            },
            Ordering::Greater => {
                let diff = a.exponent() - b.exponent();
                if diff > self.config.negligible_exponent_gap {
                    tracing::debug!(
                        gap = diff,
                        "Dropping {} as negligible against {}",
                        b,
                        a
                    );
                    return Alignment::Negligible(a);
                }
                Alignment::Aligned {
                    lhs: a.mantissa(),
                    rhs: shift_down(b.mantissa(), diff),
                    exponent: a.exponent(),
                }
            }
            // No negligibility cutoff when the left operand is the smaller one
            Ordering::Less => {
                let diff = b.exponent() - a.exponent();
                Alignment::Aligned {
                    lhs: shift_down(a.mantissa(), diff),
                    rhs: b.mantissa(),
                    exponent: b.exponent(),
                }
            }
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Add two numbers.
    ///
    /// Both operands are normalized first; the sum itself is not.
    ///
    /// # Errors
    /// Returns `Overflow` if the aligned mantissas do not fit in 256 bits.
    pub fn add(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        let a = self.normalize(a)?;
        let b = self.normalize(b)?;

        match self.align(a, b) {
            Alignment::Negligible(result) => Ok(result),
            Alignment::Aligned { lhs, rhs, exponent } => lhs
                .checked_add(rhs)
                .map(|mantissa| SciNumber::new(mantissa, exponent))
                .ok_or_else(|| {
                    tracing::debug!("Mantissa overflow adding {} and {}", a, b);
                    NumericError::Overflow
                }),
        }
    }

    /// Subtract `b` from `a`.
    ///
    /// Operands are taken as given; normalize them first if canonical
    /// alignment matters.
    ///
    /// # Errors
    /// Returns `Underflow` if the aligned subtrahend exceeds the minuend.
    pub fn sub(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        match self.align(a, b) {
            Alignment::Negligible(result) => Ok(result),
            Alignment::Aligned { lhs, rhs, exponent } => lhs
                .checked_sub(rhs)
                .map(|mantissa| SciNumber::new(mantissa, exponent))
                .ok_or_else(|| {
                    tracing::debug!("Mantissa underflow subtracting {} from {}", b, a);
                    NumericError::Underflow
                }),
        }
    }

    /// Multiply two numbers and normalize the product.
    ///
    /// # Errors
    /// Returns `Overflow` if the mantissa product exceeds 256 bits or the
    /// exponent sum exceeds `u64::MAX`.
    pub fn mul(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        let a = self.normalize(a)?;
        let b = self.normalize(b)?;

        let mantissa = a.mantissa().checked_mul(b.mantissa()).ok_or_else(|| {
            tracing::debug!("Mantissa overflow multiplying {} by {}", a, b);
            NumericError::Overflow
        })?;
        let exponent = a.exponent().checked_add(b.exponent()).ok_or_else(|| {
            tracing::debug!("Exponent overflow multiplying {} by {}", a, b);
            NumericError::Overflow
        })?;

        self.normalize(SciNumber::new(mantissa, exponent))
    }

    /// Divide `a` by `b`, truncating.
    ///
    /// When `a` has the larger exponent, its mantissa is scaled up (by at
    /// most `10^division_upscale_digits`) before dividing so the quotient
    /// keeps its low-order digits. That branch is normalized; the others
    /// are not.
    ///
    /// # Errors
    /// - `DivisionByZero` if `b`'s mantissa is zero
    /// - `Overflow` if scaling the dividend exceeds 256 bits
    pub fn div(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        if b.is_zero() {
            tracing::debug!("Division of {} by zero mantissa {}", a, b);
            return Err(NumericError::DivisionByZero);
        }

        let a = self.normalize(a)?;
        let b = self.normalize(b)?;

        match a.exponent().cmp(&b.exponent()) {
            Ordering::Equal => {
                let quotient = checked_quotient(a.mantissa(), b.mantissa())?;
                Ok(SciNumber::new(quotient, 0))
            }
            Ordering::Less => {
                let diff = b.exponent() - a.exponent();
                let dividend = shift_down(a.mantissa(), diff);
                let quotient = checked_quotient(dividend, b.mantissa())?;
                Ok(SciNumber::new(quotient, 0))
            }
            Ordering::Greater => {
                let diff = a.exponent() - b.exponent();
                let upscale = u64::from(self.config.division_upscale_digits);

                let (shift, exponent) = if diff >= upscale {
                    tracing::debug!(
                        gap = diff,
                        "Capping dividend upscale at 10^{} dividing {} by {}",
                        upscale,
                        a,
                        b
                    );
                    (upscale, diff - upscale)
                } else {
                    (diff, 0)
                };

                let dividend = shift_up(a.mantissa(), shift).map_err(|err| {
                    tracing::debug!("Dividend overflow scaling {} by 10^{}", a, shift);
                    err
                })?;
                let quotient = checked_quotient(dividend, b.mantissa())?;
                self.normalize(SciNumber::new(quotient, exponent))
            }
        }
    }
}

impl Default for ScientificEngine {
    fn default() -> Self {
        Self::reference()
    }
}

#[inline]
fn checked_quotient(dividend: U256, divisor: U256) -> NumericResult<U256> {
    dividend
        .checked_div(divisor)
        .ok_or(NumericError::DivisionByZero)
}
