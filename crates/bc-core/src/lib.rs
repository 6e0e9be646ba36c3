//! bc-core: stable foundation for biocycle.
//!
//! Contains:
//! - constants (gas properties, ambient state, unit conversion factors)
//! - numeric (Real + tolerances + guarded-ratio helpers)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BcError, BcResult};
pub use numeric::*;
