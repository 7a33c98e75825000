//! Object-safe interface over token issuing and validation

use chrono::Duration;

use crate::domain::value_objects::Validation;
use crate::errors::TokenError;

use super::clock::Clock;
use super::entropy::EntropySource;
use super::service::TokenService;

/// Anything that can issue and validate bearer tokens
pub trait TokenEmitter: Send + Sync {
    /// Issues a token for `id`
    fn generate(&self, id: &str) -> Result<String, TokenError>;

    /// Checks `token` is authentic and no older than `max_age`
    fn validate(&self, token: &str, max_age: Duration) -> Validation;
}

impl<E: EntropySource, C: Clock> TokenEmitter for TokenService<E, C> {
    fn generate(&self, id: &str) -> Result<String, TokenError> {
        TokenService::generate(self, id)
    }

    fn validate(&self, token: &str, max_age: Duration) -> Validation {
        TokenService::validate(self, token, max_age)
    }
}
