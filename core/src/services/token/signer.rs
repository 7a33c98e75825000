//! HMAC-SHA-512/256 signing of token claims

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha512_256;

use crate::domain::entities::token::TokenClaims;
use crate::errors::DomainError;

type HmacSha512_256 = Hmac<Sha512_256>;

/// Holds the keyed MAC state; the raw secret is not retained.
#[derive(Clone)]
pub(crate) struct TokenSigner {
    mac: HmacSha512_256,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HMAC-SHA-512/256")
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    pub(crate) fn new(secret: &[u8]) -> Result<Self, DomainError> {
        let mac = HmacSha512_256::new_from_slice(secret).map_err(|e| DomainError::Internal {
            message: format!("Invalid HMAC key: {}", e),
        })?;
        Ok(Self { mac })
    }

    /// 32-byte tag over the claims' signing input
    pub(crate) fn sign(&self, claims: &TokenClaims) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(&claims.signing_input());
        mac.finalize().into_bytes().to_vec()
    }

    /// Full wire form of `claims` under this key
    pub(crate) fn encode(&self, claims: &TokenClaims) -> String {
        claims.encode(&self.sign(claims))
    }

    /// Re-encodes `claims` and compares the entire token in constant time
    pub(crate) fn matches(&self, presented: &str, claims: &TokenClaims) -> bool {
        let expected = self.encode(claims);
        constant_time_eq(expected.as_bytes(), presented.as_bytes())
    }
}
