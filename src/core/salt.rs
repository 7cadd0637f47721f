// src/core/salt.rs
//! Salt generation — the only entropy-consuming operation in the crate

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::aliases::Salt16;
use crate::consts::SALT_LEN;
use crate::error::CoreError;

use super::Result;

/// Generate a fresh 16-byte salt from the operating system's secure source.
///
/// Fails only when the platform cannot supply randomness at all; that is a
/// deployment defect rather than a data problem, so it surfaces as a hard
/// error instead of a silent "invalid".
pub fn generate_salt() -> Result<Salt16> {
    generate_salt_from(&mut OsRng)
}

/// Generate a salt from a caller-supplied random source.
///
/// Lets tests substitute a deterministic generator for the OS source.
pub fn generate_salt_from<R: TryRngCore>(rng: &mut R) -> Result<Salt16> {
    let mut bytes = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| CoreError::RandomSource(e.to_string()))?;
    Ok(Salt16::new(bytes))
}

/// Parse a stored hex salt back into its fixed-size form.
///
/// Returns `None` unless the input decodes to exactly [`SALT_LEN`] bytes.
pub fn parse_salt_hex(salt_hex: &str) -> Option<Salt16> {
    let bytes = hex::decode(salt_hex).ok()?;
    let bytes: [u8; SALT_LEN] = bytes.try_into().ok()?;
    Some(Salt16::new(bytes))
}
