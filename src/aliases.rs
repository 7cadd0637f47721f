// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout cetele-credentials.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // 256-bit PBKDF2 output
fixed_alias!(Salt16, 16); // per-credential random salt

// Dynamic secrets
dynamic_alias!(PlainPassword, String); // user-typed password awaiting hashing or verification
