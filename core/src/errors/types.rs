//! Token error types
//!
//! Every reason a token can be refused, plus the one way issuing can fail.

use thiserror::Error;

/// Token wire segments, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSegment {
    Signature,
    Nonce,
    Id,
    IssuedAt,
}

impl std::fmt::Display for TokenSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSegment::Signature => write!(f, "signature"),
            TokenSegment::Nonce => write!(f, "nonce"),
            TokenSegment::Id => write!(f, "id"),
            TokenSegment::IssuedAt => write!(f, "issued_at"),
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Secure random source failed: {message}")]
    EntropyFailure { message: String },

    #[error("Malformed token: expected 4 segments, found {segments}")]
    MalformedToken { segments: usize },

    #[error("Token {segment} segment could not be decoded")]
    DecodeError { segment: TokenSegment },

    #[error("Token issue time is not a valid integer")]
    InvalidTimestamp,

    #[error("Timestamp outside the representable nanosecond range")]
    TimestampOutOfRange,

    #[error("Token authentication failed")]
    AuthenticationFailure,

    #[error("Token expired")]
    Expired,
}

impl TokenError {
    /// Stable short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::EntropyFailure { .. } => "entropy_failure",
            TokenError::MalformedToken { .. } => "malformed_token",
            TokenError::DecodeError { .. } => "decode_error",
            TokenError::InvalidTimestamp => "invalid_timestamp",
            TokenError::TimestampOutOfRange => "timestamp_out_of_range",
            TokenError::AuthenticationFailure => "authentication_failure",
            TokenError::Expired => "expired",
        }
    }
}
