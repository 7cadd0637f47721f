// tests/legacy_tests.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use cetele_credentials::core::legacy::check_legacy;
use cetele_credentials::{
    is_legacy_hash, CredentialHasher, HasherConfig, LegacyCheck, PlainPassword,
};

mod common;

fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(HasherConfig::with_iterations(1_000))
}

#[test]
fn test_classification_is_structural() {
    assert!(is_legacy_hash("YWJjMTIz")); // base64, no separator
    assert!(!is_legacy_hash("a1b2c3:d4e5f6")); // separator present
    assert!(is_legacy_hash("")); // still total
    assert!(is_legacy_hash("!!!not base64 either!!!"));
    assert!(!is_legacy_hash(":"));
}

#[test]
fn test_legacy_credential_verifies_and_requests_upgrade() {
    common::setup();
    let hasher = test_hasher();
    let stored = STANDARD.encode("hunter2");

    let password = PlainPassword::new("hunter2".to_string());
    let outcome = hasher.verify_password_with_legacy(&password, &stored);
    assert!(outcome.valid);
    assert!(outcome.needs_upgrade);
}

#[test]
fn test_legacy_wrong_password_does_not_request_upgrade() {
    let hasher = test_hasher();
    let stored = STANDARD.encode("hunter2");

    let wrong = PlainPassword::new("wrong".to_string());
    let outcome = hasher.verify_password_with_legacy(&wrong, &stored);
    assert!(!outcome.valid);
    assert!(!outcome.needs_upgrade);
}

#[test]
fn test_malformed_legacy_payload_degrades_to_invalid() {
    let hasher = test_hasher();
    let password = PlainPassword::new("anything".to_string());

    // No separator, not valid base64 — must classify as legacy and fail closed
    let outcome = hasher.verify_password_with_legacy(&password, "!!!not-base64!!!");
    assert!(!outcome.valid);
    assert!(!outcome.needs_upgrade);
}

#[test]
fn test_check_legacy_distinguishes_mismatch_from_malformed() {
    let password = PlainPassword::new("hunter2".to_string());

    let mismatch = check_legacy(&password, &STANDARD.encode("other"));
    assert_eq!(mismatch, LegacyCheck::Mismatch);
    assert!(!mismatch.is_valid());

    let malformed = check_legacy(&password, "%%%");
    assert_eq!(malformed, LegacyCheck::MalformedPayload);

    // Valid base64 of bytes that are not UTF-8 is still malformed
    let non_utf8 = STANDARD.encode([0xff, 0xfe, 0xfd]);
    assert_eq!(check_legacy(&password, &non_utf8), LegacyCheck::MalformedPayload);

    assert_eq!(
        check_legacy(&password, &STANDARD.encode("hunter2")),
        LegacyCheck::Valid
    );
}

#[test]
fn test_current_format_never_requests_upgrade() {
    let hasher = test_hasher();
    let password = PlainPassword::new("fresh account".to_string());

    let stored = hasher.create_password_hash(&password).unwrap();
    assert!(!is_legacy_hash(&stored));

    let outcome = hasher.verify_password_with_legacy(&password, &stored);
    assert!(outcome.valid);
    assert!(!outcome.needs_upgrade);

    let wrong = PlainPassword::new("not it".to_string());
    let outcome = hasher.verify_password_with_legacy(&wrong, &stored);
    assert!(!outcome.valid);
    assert!(!outcome.needs_upgrade);
}

#[test]
fn test_corrupt_current_format_degrades_to_invalid() {
    let hasher = test_hasher();
    let password = PlainPassword::new("anything".to_string());

    // Separator present but neither half is usable
    for stored in [":", "abc:", ":def", "nothex:alsonothex", "a:b:c"] {
        let outcome = hasher.verify_password_with_legacy(&password, stored);
        assert!(!outcome.valid, "{stored:?} should not verify");
        assert!(!outcome.needs_upgrade);
    }
}
