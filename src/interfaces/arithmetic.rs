// ============================================================================
// Arithmetic Interface
// Defines the contract for scientific-notation arithmetic backends
// ============================================================================

use crate::engine::ScientificEngine;
use crate::numeric::{NumericResult, SciNumber};

/// Binary arithmetic over [`SciNumber`] values.
/// Implementations must be pure: no shared mutable state between calls.
pub trait Arithmetic: Send + Sync {
    /// Get the backend name for logging
    fn name(&self) -> &str;

    fn add(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber>;

    fn sub(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber>;

    fn mul(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber>;

    fn div(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber>;
}

impl Arithmetic for ScientificEngine {
    fn name(&self) -> &str {
        "scientific"
    }

    fn add(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        ScientificEngine::add(self, a, b)
    }

    fn sub(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        ScientificEngine::sub(self, a, b)
    }

    fn mul(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        ScientificEngine::mul(self, a, b)
    }

    fn div(&self, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
        ScientificEngine::div(self, a, b)
    }
}
