// ============================================================================
// Engine Configuration
// Precision thresholds for normalization, alignment and division
// ============================================================================

use crate::numeric::powers::MAX_POW10_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds that define how a `ScientificEngine` trades precision for
/// bounded mantissa width.
///
/// All thresholds are decimal digit counts. The reference values keep every
/// intermediate product inside 256 bits: `10^35 × 10^35 = 10^70` and
/// `10^35 × 10^40 = 10^75`, both below `2^256 ≈ 1.16 × 10^77`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// `normalize` reduces mantissas while they exceed `10^normalize_ceiling_digits`
    pub normalize_ceiling_digits: u32,

    /// `from_integer` reduces integers while they exceed `10^conversion_ceiling_digits`
    pub conversion_ceiling_digits: u32,

    /// Exponent gap above which `add`/`sub` drop the smaller-exponent operand
    pub negligible_exponent_gap: u64,

    /// Division scales the dividend by at most `10^division_upscale_digits`
    pub division_upscale_digits: u32,
}

impl EngineConfig {
    /// Create a configuration with explicit normalization ceilings and
    /// reference alignment/division thresholds
    pub fn new(normalize_ceiling_digits: u32, conversion_ceiling_digits: u32) -> Self {
        Self {
            normalize_ceiling_digits,
            conversion_ceiling_digits,
            ..Self::reference()
        }
    }

    /// Builder method: Set the normalization ceiling
    pub fn with_normalize_ceiling_digits(mut self, digits: u32) -> Self {
        self.normalize_ceiling_digits = digits;
        self
    }

    /// Builder method: Set the integer conversion ceiling
    pub fn with_conversion_ceiling_digits(mut self, digits: u32) -> Self {
        self.conversion_ceiling_digits = digits;
        self
    }

    /// Builder method: Set the negligibility cutoff
    pub fn with_negligible_exponent_gap(mut self, gap: u64) -> Self {
        self.negligible_exponent_gap = gap;
        self
    }

    /// Builder method: Set the division upscale
    pub fn with_division_upscale_digits(mut self, digits: u32) -> Self {
        self.division_upscale_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let normalize = u64::from(self.normalize_ceiling_digits);
        let conversion = u64::from(self.conversion_ceiling_digits);
        let upscale = u64::from(self.division_upscale_digits);

        if normalize == 0 {
            return Err("Normalize ceiling must be at least one digit".to_string());
        }

        if conversion > normalize {
            return Err(
                "Conversion ceiling cannot exceed the normalize ceiling".to_string(),
            );
        }

        // mantissa x mantissa in mul
        if 2 * normalize > MAX_POW10_DIGITS {
            return Err(format!(
                "Normalize ceiling of {} digits overflows 256-bit products",
                normalize
            ));
        }

        // mantissa x 10^upscale in div
        if normalize + upscale > MAX_POW10_DIGITS {
            return Err(format!(
                "Division upscale of {} digits overflows 256 bits with a {}-digit mantissa",
                upscale, normalize
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Reference thresholds
    /// - Normalize ceiling: 10^35
    /// - Conversion ceiling: 10^30
    /// - Negligibility cutoff: exponent gap > 31
    /// - Division upscale: 10^40
    pub const fn reference() -> Self {
        Self {
            normalize_ceiling_digits: 35,
            conversion_ceiling_digits: 30,
            negligible_exponent_gap: 31,
            division_upscale_digits: 40,
        }
    }

    /// Reference thresholds with the widest division upscale that still
    /// fits a 35-digit mantissa (10^42)
    pub const fn wide_division() -> Self {
        Self {
            division_upscale_digits: 42,
            ..Self::reference()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::reference()
    }
}
