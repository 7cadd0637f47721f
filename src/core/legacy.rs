// src/core/legacy.rs
//! Legacy credential format — reversible base64, retired via lazy migration
//!
//! Pre-migration accounts stored the password as plain base64 with no salt
//! and no key stretching. The format stays verifiable so existing users can
//! still log in; every successful legacy verification tells the caller to
//! rewrite the credential in the current format.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::PlainPassword;
use crate::consts::FORMAT_SEPARATOR;

/// A stored credential with no separator is in the legacy encoding.
///
/// Total over all strings — classification never fails.
pub fn is_legacy_hash(stored: &str) -> bool {
    !stored.contains(FORMAT_SEPARATOR)
}

/// Outcome of checking a password against a legacy payload.
///
/// Callers outside the verification paths only ever see the boolean
/// projection; the variants exist so tests can tell a mismatch from a
/// payload that never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyCheck {
    Valid,
    Mismatch,
    MalformedPayload,
}

impl LegacyCheck {
    pub fn is_valid(self) -> bool {
        self == LegacyCheck::Valid
    }
}

/// Decode a legacy payload and compare it to the supplied password.
///
/// The comparison is plain equality: the legacy format predates the
/// constant-time comparator and keeps its original timing behavior until
/// the last credential is migrated away from it.
pub fn check_legacy(password: &PlainPassword, stored: &str) -> LegacyCheck {
    let bytes = match STANDARD.decode(stored) {
        Ok(bytes) => bytes,
        Err(_) => return LegacyCheck::MalformedPayload,
    };

    let decoded = match String::from_utf8(bytes) {
        Ok(s) => PlainPassword::new(s),
        Err(_) => return LegacyCheck::MalformedPayload,
    };

    if decoded.expose_secret() == password.expose_secret() {
        LegacyCheck::Valid
    } else {
        LegacyCheck::Mismatch
    }
}
