// ============================================================================
// Numeric Errors
// Error types for scientific-notation arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during scientific-notation arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Intermediate value exceeded the 256-bit mantissa or the u64 exponent
    Overflow,
    /// Unsigned subtraction would go below zero
    Underflow,
    /// Divisor mantissa is zero
    DivisionByZero,
    /// Conversion would drop a fractional part
    PrecisionLoss,
    /// Input string, value or configuration is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below zero")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value has a fractional part"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
