// tests/hasher_tests.rs
use cetele_credentials::consts::{DERIVED_KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
use cetele_credentials::{
    generate_salt, timing_safe_eq, CredentialHasher, HasherConfig, PlainPassword, Salt16,
    SecureRandomExt,
};

mod common;

/// Reduced work factor keeps the suite fast; the derivation path is identical.
fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(HasherConfig::with_iterations(1_000))
}

#[test]
fn test_default_config_uses_production_iterations() {
    let hasher = CredentialHasher::default();
    assert_eq!(hasher.config().iterations, PBKDF2_ITERATIONS);
}

#[test]
fn test_hash_is_deterministic_for_fixed_salt() {
    let hasher = test_hasher();
    let password = PlainPassword::new("correct horse battery staple".to_string());
    let salt = generate_salt().unwrap();

    let first = hasher.hash_password_with_salt(&password, &salt).unwrap();
    let second = hasher.hash_password_with_salt(&password, &salt).unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(first.salt, second.salt);
}

#[test]
fn test_distinct_salts_produce_distinct_hashes() {
    let hasher = test_hasher();
    let password = PlainPassword::new("same password".to_string());

    let s1 = generate_salt().unwrap();
    let s2 = Salt16::random();

    let h1 = hasher.hash_password_with_salt(&password, &s1).unwrap();
    let h2 = hasher.hash_password_with_salt(&password, &s2).unwrap();

    assert_ne!(h1.salt, h2.salt);
    assert_ne!(h1.hash, h2.hash);
}

#[test]
fn test_hash_and_salt_are_lowercase_hex_of_fixed_length() {
    let hasher = test_hasher();
    let password = PlainPassword::new("shape check".to_string());

    let hashed = hasher.hash_password(&password).unwrap();

    assert_eq!(hashed.hash.len(), DERIVED_KEY_LEN * 2);
    assert_eq!(hashed.salt.len(), SALT_LEN * 2);
    assert!(hashed
        .hash
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert!(hashed
        .salt
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_roundtrip_verifies() {
    common::setup();
    let hasher = test_hasher();
    let password = PlainPassword::new("hunter2".to_string());

    let hashed = hasher.hash_password(&password).unwrap();
    assert!(hasher.verify_password(&password, &hashed.hash, &hashed.salt));
}

#[test]
fn test_altered_password_is_rejected() {
    let hasher = test_hasher();
    let password = PlainPassword::new("hunter2".to_string());
    let hashed = hasher.hash_password(&password).unwrap();

    let altered = PlainPassword::new("hunter3".to_string());
    assert!(!hasher.verify_password(&altered, &hashed.hash, &hashed.salt));
}

#[test]
fn test_malformed_stored_salt_degrades_to_false() {
    let hasher = test_hasher();
    let password = PlainPassword::new("whatever".to_string());
    let hashed = hasher.hash_password(&password).unwrap();

    assert!(!hasher.verify_password(&password, &hashed.hash, "zz not hex zz"));
    assert!(!hasher.verify_password(&password, &hashed.hash, "abcd")); // wrong length
    assert!(!hasher.verify_password(&password, &hashed.hash, ""));
}

#[test]
fn test_reverification_is_idempotent() {
    let hasher = test_hasher();
    let password = PlainPassword::new("stable".to_string());
    let hashed = hasher.hash_password(&password).unwrap();

    for _ in 0..3 {
        assert!(hasher.verify_password(&password, &hashed.hash, &hashed.salt));
    }
    let wrong = PlainPassword::new("unstable".to_string());
    for _ in 0..3 {
        assert!(!hasher.verify_password(&wrong, &hashed.hash, &hashed.salt));
    }
}

#[test]
fn test_iteration_count_is_part_of_the_derivation() {
    let password = PlainPassword::new("work factor".to_string());
    let salt = generate_salt().unwrap();

    let low = CredentialHasher::new(HasherConfig::with_iterations(1_000));
    let high = CredentialHasher::new(HasherConfig::with_iterations(2_000));

    let h1 = low.hash_password_with_salt(&password, &salt).unwrap();
    let h2 = high.hash_password_with_salt(&password, &salt).unwrap();
    assert_ne!(h1.hash, h2.hash);
}

#[test]
fn test_create_password_hash_roundtrips_with_default_config() {
    let hasher = CredentialHasher::default();
    let password = PlainPassword::new("production path".to_string());

    let stored = hasher.create_password_hash(&password).unwrap();
    let (hash, salt) = stored.split_once(':').unwrap();

    assert!(hasher.verify_password(&password, hash, salt));
}

#[test]
fn test_timing_safe_eq_matrix() {
    assert!(timing_safe_eq(b"abc", b"abc"));
    assert!(!timing_safe_eq(b"abc", b"abd"));
    assert!(!timing_safe_eq(b"ab", b"abc")); // length mismatch
    assert!(timing_safe_eq(b"", b""));
}
