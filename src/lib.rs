// ============================================================================
// Scientific Number Library
// Overflow-aware mantissa x 10^exponent arithmetic over 256-bit integers
// ============================================================================

//! # Scientific Number
//!
//! Deterministic arithmetic on unsigned magnitudes far beyond native integer
//! range, stored as `mantissa × 10^exponent`.
//!
//! ## Features
//!
//! - **Bounded mantissa width**: values are normalized below `10^35`, so every
//!   product and scaled dividend fits a fixed 256-bit integer
//! - **Explicit precision policy**: truncating digit shifts, a negligibility
//!   cutoff for far-apart exponents, and dividend upscaling in division
//! - **Typed failures**: division by zero, underflow and overflow are returned
//!   as [`numeric::NumericError`], never wrapped silently
//! - **Configurable thresholds** through [`domain::EngineConfig`]
//!
//! ## Example
//!
//! ```rust
//! use sci_number::prelude::*;
//!
//! let a = SciNumber::new(U256::from(5u8), 100);
//! let b = SciNumber::from(3u64);
//!
//! // 3 is 100 orders of magnitude below `a` and is dropped
//! assert_eq!(sci_number::add(a, b).unwrap(), a);
//!
//! // Division upscales the dividend instead of losing every digit
//! let q = sci_number::div(SciNumber::new(U256::from(1u8), 45), SciNumber::from(7u64)).unwrap();
//! println!("1e45 / 7 = {}", q);
//!
//! assert_eq!(
//!     sci_number::div(a, SciNumber::ZERO),
//!     Err(NumericError::DivisionByZero)
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use engine::{add, div, from_integer, mul, normalize, sub};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::EngineConfig;
    pub use crate::engine::{
        create_from_config, create_from_preset, reference_engine, ScientificEngine,
    };
    pub use crate::interfaces::{Arithmetic, Operation};
    pub use crate::numeric::{NumericError, NumericResult, SciNumber, U256};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::powers::shift_up;

    fn pow(coefficient: u64, digits: u64) -> U256 {
        shift_up(U256::from(coefficient), digits).unwrap()
    }

    #[test]
    fn test_negligible_addend_end_to_end() {
        let a = SciNumber::new(pow(5, 76), 100);
        let b = crate::from_integer(pow(3, 55));

        assert_eq!(b, SciNumber::new(pow(3, 29), 26));

        let normalized_a = crate::normalize(a).unwrap();
        assert_eq!(normalized_a, SciNumber::new(pow(5, 34), 142));

        // Exponent gap 142 - 26 = 116 is far beyond the cutoff
        let sum = crate::add(a, b).unwrap();
        assert_eq!(sum, normalized_a);
    }

    #[test]
    fn test_mul_then_div_recovers_operand() {
        let a = crate::from_integer(pow(123_456_789, 40));
        let b = crate::from_integer(pow(987_654_321, 20));

        let product = crate::mul(a, b).unwrap();
        let back = crate::div(product, b).unwrap();

        assert_eq!(back.to_integer().unwrap(), a.to_integer().unwrap());
    }

    #[test]
    fn test_harness_style_dispatch() {
        let engine = create_from_preset("reference").unwrap();
        let a: SciNumber = "250e10".parse().unwrap();
        let b: SciNumber = "5e10".parse().unwrap();

        let results: Vec<String> = Operation::ALL
            .iter()
            .map(|op| op.apply(&engine, a, b).unwrap().to_string())
            .collect();

        assert_eq!(results, ["255e10", "245e10", "1250e20", "50e0"]);
    }

    #[test]
    fn test_errors_are_typed() {
        let one = SciNumber::ONE;

        assert_eq!(crate::div(one, SciNumber::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(crate::sub(SciNumber::ZERO, one), Err(NumericError::Underflow));
        assert_eq!(
            crate::mul(
                SciNumber::new(U256::from(1u8), u64::MAX),
                SciNumber::new(U256::from(1u8), 1)
            ),
            Err(NumericError::Overflow)
        );
    }
}
