// ============================================================================
// Property Tests
// Invariants of normalization, conversion and the four operations
// ============================================================================

use proptest::prelude::*;
use sci_number::numeric::powers::{pow10, shift_down, shift_up};
use sci_number::prelude::*;

fn ceiling(digits: u64) -> U256 {
    pow10(digits).unwrap()
}

fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

/// Mantissas already at or below the 10^35 ceiling
fn normalized_mantissa() -> impl Strategy<Value = U256> {
    any::<u128>().prop_map(|m| U256::from(m % (10u128.pow(35) + 1)))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(mantissa in any_u256(), exponent in 0u64..1_000_000) {
        let once = sci_number::normalize(SciNumber::new(mantissa, exponent)).unwrap();
        let twice = sci_number::normalize(once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_respects_ceiling(mantissa in any_u256(), exponent in 0u64..1_000_000) {
        let x = SciNumber::new(mantissa, exponent);
        let n = sci_number::normalize(x).unwrap();

        prop_assert!(n.mantissa() <= ceiling(35));
        prop_assert!(n.exponent() >= x.exponent());

        // Exactly the dropped digits are truncated away
        let dropped = n.exponent() - x.exponent();
        prop_assert_eq!(n.mantissa(), shift_down(mantissa, dropped));
    }

    #[test]
    fn from_integer_is_minimal_and_truncating(value in any_u256()) {
        let x = sci_number::from_integer(value);

        prop_assert!(x.mantissa() <= ceiling(30));
        prop_assert_eq!(x.mantissa(), shift_down(value, x.exponent()));
        if x.exponent() > 0 {
            prop_assert!(shift_down(value, x.exponent() - 1) > ceiling(30));
        }

        // Reconstruction error is below one unit of the last kept digit
        let rebuilt = x.to_integer().unwrap();
        prop_assert!(rebuilt <= value);
        prop_assert!(value - rebuilt < pow10(x.exponent()).unwrap());
    }

    #[test]
    fn adding_zero_yields_normalized_operand(mantissa in any_u256(), exponent in 0u64..1_000_000) {
        let x = SciNumber::new(mantissa, exponent);
        let zero = sci_number::from_integer(U256::ZERO);

        prop_assert_eq!(sci_number::add(zero, x).unwrap(), sci_number::normalize(x).unwrap());
    }

    #[test]
    fn negligible_addend_is_dropped(
        a_mantissa in normalized_mantissa(),
        b_mantissa in normalized_mantissa(),
        b_exponent in 0u64..1_000,
        extra_gap in 0u64..1_000,
    ) {
        let a = SciNumber::new(a_mantissa, b_exponent + 32 + extra_gap);
        let b = SciNumber::new(b_mantissa, b_exponent);

        prop_assert_eq!(sci_number::add(a, b).unwrap(), a);
    }

    #[test]
    fn mul_then_div_round_trips(
        a_mantissa in any::<u32>(),
        b_mantissa in 1u32..,
        a_exponent in 0u64..60,
        b_exponent in 0u64..30,
    ) {
        let a = SciNumber::new(U256::from(a_mantissa), a_exponent);
        let b = SciNumber::new(U256::from(b_mantissa), b_exponent);

        let product = sci_number::mul(a, b).unwrap();
        let back = sci_number::div(product, b).unwrap();

        prop_assert_eq!(back.to_integer().unwrap(), a.to_integer().unwrap());
    }

    #[test]
    fn div_by_zero_mantissa_fails(
        mantissa in any_u256(),
        exponent in any::<u64>(),
        zero_exponent in any::<u64>(),
    ) {
        let a = SciNumber::new(mantissa, exponent);
        let zero = SciNumber::new(U256::ZERO, zero_exponent);

        prop_assert_eq!(sci_number::div(a, zero), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn sub_underflows_on_larger_subtrahend(
        a_mantissa in any::<u128>(),
        delta in 1u128..,
        exponent in any::<u64>(),
    ) {
        let b_mantissa = U256::from(a_mantissa) + U256::from(delta);
        let a = SciNumber::new(U256::from(a_mantissa), exponent);
        let b = SciNumber::new(b_mantissa, exponent);

        prop_assert_eq!(sci_number::sub(a, b), Err(NumericError::Underflow));
    }

    #[test]
    fn sub_inverts_add_at_equal_exponents(
        a_mantissa in normalized_mantissa(),
        b_mantissa in normalized_mantissa(),
        exponent in 0u64..1_000,
    ) {
        let a = SciNumber::new(a_mantissa, exponent);
        let b = SciNumber::new(b_mantissa, exponent);

        let sum = sci_number::add(a, b).unwrap();
        prop_assert_eq!(sci_number::sub(sum, b).unwrap(), a);
    }

    #[test]
    fn scaled_dividend_never_overflows(
        a_mantissa in any_u256(),
        b_mantissa in any_u256(),
        a_exponent in 0u64..1_000,
        b_exponent in 0u64..1_000,
    ) {
        prop_assume!(!b_mantissa.is_zero());
        let a = SciNumber::new(a_mantissa, a_exponent);
        let b = SciNumber::new(b_mantissa, b_exponent);

        prop_assert!(sci_number::div(a, b).is_ok());
        prop_assert!(sci_number::mul(a, b).is_ok());
    }
}

#[test]
fn shift_helpers_agree_with_to_integer() {
    let x = SciNumber::new(U256::from(42u8), 30);
    assert_eq!(x.to_integer().unwrap(), shift_up(U256::from(42u8), 30).unwrap());
}
