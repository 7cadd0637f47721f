// src/consts.rs
//! Shared constants — security parameters and defaults

/// PBKDF2 iteration count for stored credentials
// 100_000 ≈ well under a second on commodity hardware — fine for interactive logins
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Reduced iteration count used when a deployment opts out of the KDF slowdown (test suites)
pub const TEST_KDF_ITERATIONS: u32 = 1_000;

/// Salt length in bytes (32 hex chars in the stored form)
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (64 hex chars in the stored form)
pub const DERIVED_KEY_LEN: usize = 32;

/// Separator between hash and salt in the current stored format
pub const FORMAT_SEPARATOR: char = ':';
