//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{TokenClaims, SEGMENT_SEPARATOR, TOKEN_SEGMENTS};
