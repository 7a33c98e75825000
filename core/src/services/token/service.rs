//! Main token service implementation

use chrono::Duration;

use crate::domain::entities::token::TokenClaims;
use crate::domain::value_objects::{Validation, VerifiedToken};
use crate::errors::{DomainError, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::entropy::{EntropySource, OsEntropy};
use super::signer::TokenSigner;

/// Issues and validates stateless HMAC bearer tokens.
///
/// The service holds only immutable state, so a single instance can be shared
/// across threads (e.g. behind an `Arc`) without locking.
#[derive(Debug)]
pub struct TokenService<E = OsEntropy, C = SystemClock> {
    signer: TokenSigner,
    entropy: E,
    clock: C,
    default_max_age: Duration,
    nonce_length: usize,
    disclose_unverified_claims: bool,
}

/// How far a token got through validation
enum Checked {
    /// Unreadable; nothing can be reported
    Rejected(TokenError),
    /// Readable, but the signature does not verify
    Unauthenticated(TokenClaims),
    /// Authentic but older than the allowed age
    Expired(TokenClaims),
    Valid(TokenClaims),
}

impl TokenService {
    /// Creates a service backed by the OS random source and system clock
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or error if the configuration is unusable
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        Self::with_sources(config, OsEntropy, SystemClock)
    }
}

impl<E: EntropySource, C: Clock> TokenService<E, C> {
    /// Creates a service with explicit entropy and clock collaborators
    pub fn with_sources(
        config: TokenServiceConfig,
        entropy: E,
        clock: C,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        if config.is_using_default_secret() {
            tracing::warn!(
                event = "default_token_secret",
                "Token service is using the development secret"
            );
        }

        Ok(Self {
            signer: TokenSigner::new(&config.secret)?,
            entropy,
            clock,
            default_max_age: config.default_max_age,
            nonce_length: config.nonce_length,
            disclose_unverified_claims: config.disclose_unverified_claims,
        })
    }

    /// Max age applied by `validate_default`
    pub fn default_max_age(&self) -> Duration {
        self.default_max_age
    }

    /// Issues a token binding `id` to the current instant
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(TokenError::EntropyFailure)` - No nonce could be drawn
    /// * `Err(TokenError::TimestampOutOfRange)` - The clock is outside the nanosecond range
    pub fn generate(&self, id: &str) -> Result<String, TokenError> {
        let mut nonce = vec![0u8; self.nonce_length];
        self.entropy.fill(&mut nonce).map_err(|e| {
            tracing::error!(
                error = %e,
                event = "token_entropy_failure",
                "Failed to draw token nonce"
            );
            e
        })?;

        let issued_at_nanos = self
            .clock
            .now()
            .timestamp_nanos_opt()
            .ok_or(TokenError::TimestampOutOfRange)?;

        let claims = TokenClaims::new(nonce, id, issued_at_nanos);
        let token = self.signer.encode(&claims);

        tracing::debug!(
            id_len = id.len(),
            issued_at = %claims.issued_at(),
            event = "token_generated",
            "Issued bearer token"
        );

        Ok(token)
    }

    /// Validates `token`, collapsing every failure into a negative `Validation`
    ///
    /// Never fails: unreadable tokens yield an empty id and no issue time,
    /// expired tokens keep both.
    pub fn validate(&self, token: &str, max_age: Duration) -> Validation {
        match self.check(token, max_age) {
            Checked::Valid(claims) => Validation::accepted(&claims),
            Checked::Expired(claims) => Validation::refused(&claims),
            Checked::Unauthenticated(claims) if self.disclose_unverified_claims => {
                Validation::refused(&claims)
            }
            Checked::Unauthenticated(_) | Checked::Rejected(_) => Validation::rejected(),
        }
    }

    /// Validates `token` against the configured default max age
    pub fn validate_default(&self, token: &str) -> Validation {
        self.validate(token, self.default_max_age)
    }

    /// Validates `token`, reporting why it was refused
    ///
    /// # Returns
    ///
    /// * `Ok(VerifiedToken)` - The token is authentic and fresh
    /// * `Err(TokenError)` - The first check the token failed
    pub fn verify(&self, token: &str, max_age: Duration) -> Result<VerifiedToken, TokenError> {
        match self.check(token, max_age) {
            Checked::Valid(claims) => Ok(claims.into()),
            Checked::Expired(_) => Err(TokenError::Expired),
            Checked::Unauthenticated(_) => Err(TokenError::AuthenticationFailure),
            Checked::Rejected(e) => Err(e),
        }
    }

    fn check(&self, token: &str, max_age: Duration) -> Checked {
        let claims = match TokenClaims::decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(reason = e.kind(), event = "token_rejected", "Unreadable token");
                return Checked::Rejected(e);
            }
        };

        if !self.signer.matches(token, &claims) {
            tracing::debug!(
                reason = TokenError::AuthenticationFailure.kind(),
                event = "token_rejected",
                "Token signature mismatch"
            );
            return Checked::Unauthenticated(claims);
        }

        let elapsed = self.clock.now() - claims.issued_at();
        if elapsed > max_age {
            tracing::debug!(
                reason = TokenError::Expired.kind(),
                elapsed_ms = elapsed.num_milliseconds(),
                max_age_ms = max_age.num_milliseconds(),
                event = "token_rejected",
                "Token expired"
            );
            return Checked::Expired(claims);
        }

        Checked::Valid(claims)
    }
}
