// src/core/kdf.rs
//! PBKDF2-HMAC-SHA256 key derivation
//!
//! The algorithm and output length are pinned by the stored-credential
//! format; the iteration count is the tunable work factor and travels in
//! [`HasherConfig`](crate::core::hasher::HasherConfig).

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::aliases::{DerivedKey32, PlainPassword, Salt16};
use crate::error::CoreError;

use super::Result;

/// Derive PBKDF2-HMAC-SHA256 directly into the DerivedKey32 buffer
pub fn derive_key(
    password: &PlainPassword,
    salt: &Salt16,
    iterations: u32,
    out_key: &mut DerivedKey32,
) -> Result<()> {
    if iterations == 0 {
        return Err(CoreError::Kdf("PBKDF2 iterations must be ≥1".into()));
    }

    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| CoreError::Kdf(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}
