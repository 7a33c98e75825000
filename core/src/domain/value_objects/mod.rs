//! Value objects representing immutable domain concepts.

pub mod validation;

// Re-export commonly used types
pub use validation::{Validation, VerifiedToken};
