//! Bearer token configuration

use serde::{Deserialize, Serialize};

/// Secret used when nothing else is configured. Never acceptable in production.
pub const DEFAULT_TOKEN_SECRET: &str = "development-secret-please-change-in-production";

/// Nonce length used by the wire format.
pub const DEFAULT_NONCE_LENGTH: usize = 32;

/// Shortest nonce `validate()` accepts.
pub const MIN_NONCE_LENGTH: usize = 16;

/// Token issuing and validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Shared HMAC secret
    pub secret: String,

    /// Default maximum token age in seconds
    #[serde(default = "default_max_age_seconds")]
    pub max_age_seconds: u64,

    /// Random bytes embedded in every token
    #[serde(default = "default_nonce_length")]
    pub nonce_length: usize,

    /// Return the decoded id and issue time even when the signature does not verify
    #[serde(default)]
    pub disclose_unverified_claims: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_TOKEN_SECRET),
            max_age_seconds: default_max_age_seconds(),
            nonce_length: default_nonce_length(),
            disclose_unverified_claims: false,
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the default max age in minutes
    pub fn with_max_age_minutes(mut self, minutes: u64) -> Self {
        self.max_age_seconds = minutes * 60;
        self
    }

    /// Set the nonce length in bytes
    pub fn with_nonce_length(mut self, nonce_length: usize) -> Self {
        self.nonce_length = nonce_length;
        self
    }

    /// Keep decoded claims on authentication failure (legacy behaviour)
    pub fn with_unverified_claims_disclosed(mut self, disclose: bool) -> Self {
        self.disclose_unverified_claims = disclose;
        self
    }

    /// Create from environment variables
    ///
    /// - `TOKEN_SECRET`
    /// - `TOKEN_MAX_AGE_SECONDS`
    /// - `TOKEN_NONCE_LENGTH`
    /// - `TOKEN_DISCLOSE_UNVERIFIED_CLAIMS`
    pub fn from_env() -> Self {
        let secret = std::env::var("TOKEN_SECRET")
            .unwrap_or_else(|_| DEFAULT_TOKEN_SECRET.to_string());
        let max_age_seconds = std::env::var("TOKEN_MAX_AGE_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_age_seconds);
        let nonce_length = std::env::var("TOKEN_NONCE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_nonce_length);
        let disclose_unverified_claims = std::env::var("TOKEN_DISCLOSE_UNVERIFIED_CLAIMS")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            secret,
            max_age_seconds,
            nonce_length,
            disclose_unverified_claims,
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_TOKEN_SECRET
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.is_empty() {
            return Err(String::from("Token secret must not be empty"));
        }
        if self.nonce_length < MIN_NONCE_LENGTH {
            return Err(format!(
                "Nonce length must be at least {} bytes, got {}",
                MIN_NONCE_LENGTH, self.nonce_length
            ));
        }
        if self.max_age_seconds == 0 {
            return Err(String::from("Token max age must be greater than zero"));
        }
        Ok(())
    }
}

fn default_max_age_seconds() -> u64 {
    600 // 10 minutes
}

fn default_nonce_length() -> usize {
    DEFAULT_NONCE_LENGTH
}
