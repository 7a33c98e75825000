//! Business services containing the token logic.

pub mod token;

// Re-export commonly used types
pub use token::{
    Clock, EntropySource, FixedEntropy, ManualClock, OsEntropy, SystemClock, TokenEmitter,
    TokenService, TokenServiceConfig,
};
