//! Configuration for the token service

use chrono::Duration;
use shared::config::token::{DEFAULT_NONCE_LENGTH, DEFAULT_TOKEN_SECRET, MIN_NONCE_LENGTH};
use shared::TokenConfig;

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub secret: Vec<u8>,
    /// Max age used by `validate_default`
    pub default_max_age: Duration,
    /// Random bytes embedded in each token
    pub nonce_length: usize,
    /// Report the decoded id and issue time for tokens whose signature fails
    pub disclose_unverified_claims: bool,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"[REDACTED]")
            .field("default_max_age", &self.default_max_age)
            .field("nonce_length", &self.nonce_length)
            .field("disclose_unverified_claims", &self.disclose_unverified_claims)
            .finish()
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_TOKEN_SECRET.as_bytes().to_vec(),
            default_max_age: Duration::minutes(10),
            nonce_length: DEFAULT_NONCE_LENGTH,
            disclose_unverified_claims: false,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret and default settings
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ..Default::default()
        }
    }

    /// Whether the development secret is in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_TOKEN_SECRET.as_bytes()
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.secret.is_empty() {
            return Err(DomainError::Validation {
                message: "Token secret must not be empty".to_string(),
            });
        }
        if self.nonce_length < MIN_NONCE_LENGTH {
            return Err(DomainError::Validation {
                message: format!(
                    "Nonce length must be at least {} bytes, got {}",
                    MIN_NONCE_LENGTH, self.nonce_length
                ),
            });
        }
        if self.default_max_age <= Duration::zero() {
            return Err(DomainError::Validation {
                message: "Default max age must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<&TokenConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &TokenConfig) -> Result<Self, Self::Error> {
        config
            .validate()
            .map_err(|message| DomainError::Validation { message })?;

        let default_max_age =
            Duration::from_std(std::time::Duration::from_secs(config.max_age_seconds))
                .map_err(|e| DomainError::Validation {
                    message: format!("Token max age out of range: {}", e),
                })?;

        Ok(Self {
            secret: config.secret.as_bytes().to_vec(),
            default_max_age,
            nonce_length: config.nonce_length,
            disclose_unverified_claims: config.disclose_unverified_claims,
        })
    }
}
