//! Domain layer containing token entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{TokenClaims, SEGMENT_SEPARATOR, TOKEN_SEGMENTS};
pub use value_objects::{Validation, VerifiedToken};
