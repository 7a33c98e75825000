//! Secure random sources for token nonces

use std::sync::Arc;

use rand::{rngs::OsRng, RngCore};

use crate::errors::TokenError;

/// Source of nonce bytes
pub trait EntropySource: Send + Sync {
    /// Fills `buf` completely or fails; never leaves it partially random
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError>;
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError> {
        (**self).fill(buf)
    }
}

/// Operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| TokenError::EntropyFailure {
                message: e.to_string(),
            })
    }
}

/// Deterministic source repeating a fixed pattern (for testing)
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    /// Creates a source that cycles through `pattern`; an empty pattern yields zeros
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError> {
        if self.pattern.is_empty() {
            buf.fill(0);
            return Ok(());
        }
        for (byte, value) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
            *byte = *value;
        }
        Ok(())
    }
}
