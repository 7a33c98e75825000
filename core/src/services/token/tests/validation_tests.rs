//! Validation tests for the token service

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE as BASE64, Engine};
use chrono::{Duration, TimeZone, Utc};

use crate::errors::{TokenError, TokenSegment};
use crate::services::token::{
    FixedEntropy, ManualClock, OsEntropy, TokenService, TokenServiceConfig,
};

const SECRET: &str = "secretForTesting";
const ID: &str = "12345678";

fn service_with_clock(
    config: TokenServiceConfig,
) -> (TokenService<OsEntropy, Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ));
    let service = TokenService::with_sources(config, OsEntropy, clock.clone())
        .expect("Failed to create token service");
    (service, clock)
}

#[test]
fn test_valid_token() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();

    let validation = service.validate(&token, Duration::minutes(10));
    assert!(validation.is_valid());
    assert_eq!(validation.id, ID);
    assert_eq!(
        validation.issued_at,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn test_validation_is_repeatable() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();

    for _ in 0..3 {
        assert!(service.validate(&token, Duration::minutes(10)).valid);
    }
}

#[test]
fn test_expiry_boundary() {
    let (service, clock) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();

    clock.advance(Duration::milliseconds(100));
    assert!(service.validate(&token, Duration::minutes(10)).valid);
    assert!(service.validate(&token, Duration::seconds(1)).valid);

    // elapsed == max_age is still fresh
    assert!(service.validate(&token, Duration::milliseconds(100)).valid);

    let expired = service.validate(&token, Duration::milliseconds(50));
    assert!(!expired.valid);
    assert_eq!(expired.id, ID);
    assert!(expired.issued_at.is_some());
    assert_eq!(
        service.verify(&token, Duration::milliseconds(50)),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_token_from_the_future_is_fresh() {
    let (service, clock) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();

    clock.advance(Duration::minutes(-5));
    assert!(service.validate(&token, Duration::seconds(1)).valid);
}

#[test]
fn test_validate_default_uses_configured_max_age() {
    let mut config = TokenServiceConfig::new(SECRET);
    config.default_max_age = Duration::seconds(30);
    let (service, clock) = service_with_clock(config);
    let token = service.generate(ID).unwrap();

    clock.advance(Duration::seconds(29));
    assert!(service.validate_default(&token).valid);
    clock.advance(Duration::seconds(2));
    assert!(!service.validate_default(&token).valid);
}

#[test]
fn test_bad_data_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));

    let validation = service.validate("badData", Duration::minutes(10));
    assert!(!validation.valid);
    assert_eq!(validation.id, "");
    assert_eq!(validation.issued_at, None);
    assert_eq!(
        service.verify("badData", Duration::minutes(10)),
        Err(TokenError::MalformedToken { segments: 1 })
    );
}

#[test]
fn test_single_encoded_blob_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = BASE64.encode("badstring");

    let validation = service.validate(&token, Duration::minutes(10));
    assert_eq!(validation.into_parts(), (false, String::new(), None));
}

#[test]
fn test_empty_token_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    assert!(!service.validate("", Duration::minutes(10)).valid);
    assert!(!service.validate("...", Duration::minutes(10)).valid);
}

#[test]
fn test_bad_timestamp_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = format!(
        "{}.{}.{}.{}",
        BASE64.encode("test"),
        BASE64.encode("test1"),
        BASE64.encode(ID),
        BASE64.encode("badtime")
    );

    let validation = service.validate(&token, Duration::minutes(10));
    assert!(!validation.valid);
    assert_eq!(validation.id, "");
    assert_eq!(
        service.verify(&token, Duration::minutes(10)),
        Err(TokenError::InvalidTimestamp)
    );
}

#[test]
fn test_undecodable_segment_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    segments[1] = "*not-base64*".to_string();

    assert_eq!(
        service.verify(&segments.join("."), Duration::minutes(10)),
        Err(TokenError::DecodeError {
            segment: TokenSegment::Nonce
        })
    );
}

#[test]
fn test_non_utf8_id_is_rejected() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = format!(
        "{}.{}.{}.{}",
        BASE64.encode("sig"),
        BASE64.encode("nonce"),
        BASE64.encode([0xff, 0xfe]),
        BASE64.encode("1")
    );

    assert_eq!(
        service.verify(&token, Duration::minutes(10)),
        Err(TokenError::DecodeError {
            segment: TokenSegment::Id
        })
    );
}

#[test]
fn test_tampering_any_byte_invalidates_token() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();

    for position in 0..token.len() {
        let mut bytes = token.clone().into_bytes();
        bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(
            !service.validate(&tampered, Duration::minutes(10)).valid,
            "tampered byte {} accepted",
            position
        );
    }
}

#[test]
fn test_forged_id_is_not_authenticated() {
    let (service, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let token = service.generate(ID).unwrap();
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    segments[2] = BASE64.encode("admin");
    let forged = segments.join(".");

    let validation = service.validate(&forged, Duration::minutes(10));
    assert_eq!(validation.into_parts(), (false, String::new(), None));
    assert_eq!(
        service.verify(&forged, Duration::minutes(10)),
        Err(TokenError::AuthenticationFailure)
    );
}

#[test]
fn test_forged_id_disclosed_when_configured() {
    let mut config = TokenServiceConfig::new(SECRET);
    config.disclose_unverified_claims = true;
    let (service, _) = service_with_clock(config);
    let token = service.generate(ID).unwrap();
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    segments[2] = BASE64.encode("admin");

    let validation = service.validate(&segments.join("."), Duration::minutes(10));
    assert!(!validation.valid);
    assert_eq!(validation.id, "admin");
    assert!(validation.issued_at.is_some());
}

#[test]
fn test_wrong_secret_is_rejected() {
    let (issuer, _) = service_with_clock(TokenServiceConfig::new(SECRET));
    let (other, _) = service_with_clock(TokenServiceConfig::new("anotherSecret"));
    let token = issuer.generate(ID).unwrap();

    assert!(!other.validate(&token, Duration::days(365)).valid);
    assert_eq!(
        other.verify(&token, Duration::days(365)),
        Err(TokenError::AuthenticationFailure)
    );
}

#[test]
fn test_verify_returns_claims() {
    let clock = Arc::new(ManualClock::new(Utc.timestamp_nanos(42)));
    let service = TokenService::with_sources(
        TokenServiceConfig::new(SECRET),
        FixedEntropy::new(vec![1, 2, 3]),
        clock,
    )
    .unwrap();
    let token = service.generate(ID).unwrap();

    let verified = service.verify(&token, Duration::minutes(1)).unwrap();
    assert_eq!(verified.id, ID);
    assert_eq!(verified.issued_at, Utc.timestamp_nanos(42));
}
