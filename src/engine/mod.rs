// ============================================================================
// Engine Module
// Scientific-notation arithmetic engine and reference-threshold shortcuts
// ============================================================================

pub mod factory;
pub mod scientific;

pub use factory::{create_from_config, create_from_preset};
pub use scientific::ScientificEngine;

use crate::numeric::{NumericResult, SciNumber, U256};
use std::sync::OnceLock;

/// Shared engine with the reference thresholds.
pub fn reference_engine() -> &'static ScientificEngine {
    static ENGINE: OnceLock<ScientificEngine> = OnceLock::new();
    ENGINE.get_or_init(ScientificEngine::reference)
}

/// Normalize with the reference 10^35 ceiling.
pub fn normalize(x: SciNumber) -> NumericResult<SciNumber> {
    reference_engine().normalize(x)
}

/// Convert an integer with the reference 10^30 ceiling.
pub fn from_integer(value: U256) -> SciNumber {
    reference_engine().from_integer(value)
}

/// See [`ScientificEngine::add`].
pub fn add(a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
    reference_engine().add(a, b)
}

/// See [`ScientificEngine::sub`].
pub fn sub(a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
    reference_engine().sub(a, b)
}

/// See [`ScientificEngine::mul`].
pub fn mul(a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
    reference_engine().mul(a, b)
}

/// See [`ScientificEngine::div`].
pub fn div(a: SciNumber, b: SciNumber) -> NumericResult<SciNumber> {
    reference_engine().div(a, b)
}
