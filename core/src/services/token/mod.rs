//! Token service module for stateless bearer tokens
//!
//! This module handles all token-related operations including:
//! - Token generation (random nonce, issue time, HMAC-SHA-512/256 tag)
//! - Token validation with constant-time comparison and expiry checks
//! - Injectable entropy and clock sources

mod clock;
mod config;
mod emitter;
mod entropy;
mod service;
mod signer;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TokenServiceConfig;
pub use emitter::TokenEmitter;
pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use service::TokenService;
