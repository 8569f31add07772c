// ============================================================================
// Numeric Module
// Scientific-notation values over fixed-width 256-bit integers
// ============================================================================
//
// This module provides:
// - SciNumber: unsigned mantissa x 10^exponent value type
// - NumericError: Error types for arithmetic operations
// - powers: checked power-of-ten scaling helpers
//
// Design principles:
// - Fixed-width U256 mantissa, never unbounded growth
// - All arithmetic returns Result (no silent wraparound)
// - Truncation is the only rounding mode

mod errors;
pub mod powers;
mod sci_number;

pub use alloy_primitives::U256;
pub use errors::{NumericError, NumericResult};
pub use sci_number::SciNumber;
