//! # Token Core
//!
//! Issues and validates compact, stateless bearer tokens that bind an opaque
//! identifier to an issue time, authenticated with HMAC-SHA-512/256 over a
//! shared secret. Validation needs no storage lookup.
//!
//! ```no_run
//! use chrono::Duration;
//! use ht_core::{TokenService, TokenServiceConfig};
//!
//! let service = TokenService::new(TokenServiceConfig::new("shared-secret"))?;
//! let token = service.generate("12345678")?;
//!
//! let validation = service.validate(&token, Duration::minutes(10));
//! assert!(validation.valid);
//! assert_eq!(validation.id, "12345678");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
