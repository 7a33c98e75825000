//! Validation outcome value objects.

use chrono::{DateTime, Utc};

use crate::domain::entities::token::TokenClaims;

/// Result of `validate`: whether the token is accepted, plus the identifier and
/// issue time it carries.
///
/// Structurally broken tokens yield an empty id and no issue time. Expired
/// tokens keep both, since their signature did verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Token is authentic and within its max age
    pub valid: bool,

    /// Identifier bound to the token, empty when unknown
    pub id: String,

    /// Issue instant, `None` when unknown
    pub issued_at: Option<DateTime<Utc>>,
}

impl Validation {
    /// Outcome for tokens that could not be read or authenticated
    pub fn rejected() -> Self {
        Self {
            valid: false,
            id: String::new(),
            issued_at: None,
        }
    }

    /// Outcome for a token that passed every check
    pub fn accepted(claims: &TokenClaims) -> Self {
        Self::with_claims(true, claims)
    }

    /// Negative outcome that still reports what the token says
    pub fn refused(claims: &TokenClaims) -> Self {
        Self::with_claims(false, claims)
    }

    fn with_claims(valid: bool, claims: &TokenClaims) -> Self {
        Self {
            valid,
            id: claims.id.clone(),
            issued_at: Some(claims.issued_at()),
        }
    }

    /// Whether the token was accepted
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Splits into `(valid, id, issued_at)`
    pub fn into_parts(self) -> (bool, String, Option<DateTime<Utc>>) {
        (self.valid, self.id, self.issued_at)
    }
}

/// A token that authenticated and has not expired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Identifier bound to the token
    pub id: String,

    /// Issue instant
    pub issued_at: DateTime<Utc>,
}

impl From<TokenClaims> for VerifiedToken {
    fn from(claims: TokenClaims) -> Self {
        let issued_at = claims.issued_at();
        Self {
            id: claims.id,
            issued_at,
        }
    }
}

impl From<VerifiedToken> for Validation {
    fn from(token: VerifiedToken) -> Self {
        Self {
            valid: true,
            id: token.id,
            issued_at: Some(token.issued_at),
        }
    }
}
