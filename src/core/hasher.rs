// src/core/hasher.rs
//! The credential hasher — hash, verify, classify, signal upgrades
//!
//! Pure computation over in-memory values: no I/O, no database. The store
//! module composes these primitives into the login workflow. Every
//! operation is `&self` on a stateless value, so concurrent login attempts
//! never interact.

use crate::aliases::{DerivedKey32, PlainPassword, Salt16, SecureConversionsExt};
use crate::consts::{DERIVED_KEY_LEN, FORMAT_SEPARATOR, PBKDF2_ITERATIONS};

use super::compare::timing_safe_eq;
use super::kdf::derive_key;
use super::legacy::{check_legacy, is_legacy_hash, LegacyCheck};
use super::salt::{generate_salt, parse_salt_hex};
use super::Result;

/// Work-factor configuration, fixed at hasher construction.
///
/// The KDF algorithm and output length are part of the stored format and
/// cannot vary per instance; the iteration count can, so deployments and
/// test suites tune it without touching the production default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    pub iterations: u32,
}

impl HasherConfig {
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Hex-encoded derivation output plus the salt that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub hash: String,
    pub salt: String,
}

impl PasswordHash {
    /// Canonical stored form: `<hash>:<salt>`.
    pub fn to_stored(&self) -> String {
        format!("{}{}{}", self.hash, FORMAT_SEPARATOR, self.salt)
    }
}

/// Result of verifying against a stored credential of either format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub valid: bool,
    pub needs_upgrade: bool,
}

impl VerifyOutcome {
    fn invalid() -> Self {
        Self {
            valid: false,
            needs_upgrade: false,
        }
    }
}

/// Stateless hasher; cheap to copy and safe to share across callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher {
    config: HasherConfig,
}

impl CredentialHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> HasherConfig {
        self.config
    }

    /// Hash a password with a freshly generated salt.
    pub fn hash_password(&self, password: &PlainPassword) -> Result<PasswordHash> {
        let salt = generate_salt()?;
        self.hash_password_with_salt(password, &salt)
    }

    /// Hash a password with a caller-supplied salt.
    ///
    /// Deterministic: the same (password, salt) pair always yields the same
    /// hash under a fixed iteration count.
    pub fn hash_password_with_salt(
        &self,
        password: &PlainPassword,
        salt: &Salt16,
    ) -> Result<PasswordHash> {
        let mut key = DerivedKey32::new([0u8; DERIVED_KEY_LEN]);
        derive_key(password, salt, self.config.iterations, &mut key)?;

        Ok(PasswordHash {
            hash: key.expose_secret().to_hex(),
            salt: salt.expose_secret().to_hex(),
        })
    }

    /// Recompute the hash for `password` under `stored_salt` and compare it
    /// to `stored_hash` in constant time.
    ///
    /// Malformed salt hex and derivation failures all come back as `false`;
    /// a caller cannot tell a corrupt credential from a wrong password.
    pub fn verify_password(
        &self,
        password: &PlainPassword,
        stored_hash: &str,
        stored_salt: &str,
    ) -> bool {
        let salt = match parse_salt_hex(stored_salt) {
            Some(salt) => salt,
            None => return false,
        };

        let computed = match self.hash_password_with_salt(password, &salt) {
            Ok(computed) => computed,
            Err(_) => return false,
        };

        timing_safe_eq(computed.hash.as_bytes(), stored_hash.as_bytes())
    }

    /// Verify against a stored credential in either historical format,
    /// reporting whether the caller should rewrite it in the current one.
    pub fn verify_password_with_legacy(
        &self,
        password: &PlainPassword,
        stored: &str,
    ) -> VerifyOutcome {
        if is_legacy_hash(stored) {
            return match check_legacy(password, stored) {
                LegacyCheck::Valid => {
                    tracing::debug!("legacy credential verified; rewrite pending");
                    VerifyOutcome {
                        valid: true,
                        needs_upgrade: true,
                    }
                }
                LegacyCheck::Mismatch | LegacyCheck::MalformedPayload => VerifyOutcome::invalid(),
            };
        }

        let (hash, salt) = match stored.split_once(FORMAT_SEPARATOR) {
            Some(parts) => parts,
            None => return VerifyOutcome::invalid(),
        };

        VerifyOutcome {
            valid: self.verify_password(password, hash, salt),
            needs_upgrade: false,
        }
    }

    /// Hash with a fresh salt and return the canonical `<hash>:<salt>` form
    /// for new or upgraded credentials.
    pub fn create_password_hash(&self, password: &PlainPassword) -> Result<String> {
        Ok(self.hash_password(password)?.to_stored())
    }
}
