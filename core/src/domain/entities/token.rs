//! Token entity and its wire layout.
//!
//! A token is four URL-safe base64 (padded) segments joined with `.`:
//!
//! ```text
//! <signature>.<nonce>.<id>.<issued_at_nanos>
//! ```
//!
//! The signature covers `nonce || "." || id || "." || issued_at_nanos`, where
//! `issued_at_nanos` is the base-10 text of the issue instant in nanoseconds
//! since the Unix epoch.

use base64::{engine::general_purpose::URL_SAFE as BASE64, Engine};
use chrono::{DateTime, TimeZone, Utc};

use crate::errors::{TokenError, TokenSegment};

/// Number of `.`-separated segments in a token
pub const TOKEN_SEGMENTS: usize = 4;

/// Separator between token segments and between signed fields
pub const SEGMENT_SEPARATOR: char = '.';

/// Decoded contents of a token, everything except the signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Random bytes drawn at issue time
    pub nonce: Vec<u8>,

    /// Opaque identifier bound to the token
    pub id: String,

    /// Issue instant in nanoseconds since the Unix epoch
    pub issued_at_nanos: i64,
}

impl TokenClaims {
    /// Creates claims for a freshly issued token
    pub fn new(nonce: Vec<u8>, id: impl Into<String>, issued_at_nanos: i64) -> Self {
        Self {
            nonce,
            id: id.into(),
            issued_at_nanos,
        }
    }

    /// Issue instant as a UTC timestamp
    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.issued_at_nanos)
    }

    /// Bytes fed to the HMAC
    pub fn signing_input(&self) -> Vec<u8> {
        let timestamp = self.issued_at_nanos.to_string();
        let mut input =
            Vec::with_capacity(self.nonce.len() + self.id.len() + timestamp.len() + 2);
        input.extend_from_slice(&self.nonce);
        input.push(SEGMENT_SEPARATOR as u8);
        input.extend_from_slice(self.id.as_bytes());
        input.push(SEGMENT_SEPARATOR as u8);
        input.extend_from_slice(timestamp.as_bytes());
        input
    }

    /// Renders the wire form with the given signature
    pub fn encode(&self, signature: &[u8]) -> String {
        [
            BASE64.encode(signature),
            BASE64.encode(&self.nonce),
            BASE64.encode(self.id.as_bytes()),
            BASE64.encode(self.issued_at_nanos.to_string()),
        ]
        .join(".")
    }

    /// Parses the wire form. The signature segment is not decoded; callers
    /// authenticate by re-encoding and comparing the whole token.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let segments: Vec<&str> = token.split(SEGMENT_SEPARATOR).collect();
        if segments.len() != TOKEN_SEGMENTS {
            return Err(TokenError::MalformedToken {
                segments: segments.len(),
            });
        }

        let nonce = decode_segment(segments[1], TokenSegment::Nonce)?;

        let id = String::from_utf8(decode_segment(segments[2], TokenSegment::Id)?)
            .map_err(|_| TokenError::DecodeError {
                segment: TokenSegment::Id,
            })?;

        let timestamp = decode_segment(segments[3], TokenSegment::IssuedAt)?;
        let issued_at_nanos = std::str::from_utf8(&timestamp)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or(TokenError::InvalidTimestamp)?;

        Ok(Self {
            nonce,
            id,
            issued_at_nanos,
        })
    }
}

fn decode_segment(segment: &str, kind: TokenSegment) -> Result<Vec<u8>, TokenError> {
    BASE64
        .decode(segment)
        .map_err(|_| TokenError::DecodeError { segment: kind })
}
