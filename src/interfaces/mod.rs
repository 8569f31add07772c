// ============================================================================
// Interfaces Module
// Contracts between the engine and its callers
// ============================================================================

pub mod arithmetic;
pub mod operation;

pub use arithmetic::Arithmetic;
pub use operation::Operation;
