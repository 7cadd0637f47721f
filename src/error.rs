// src/error.rs
//! Public error type for the entire crate
//!
//! Only environmental failures cross the component boundary: a missing
//! random source or a broken KDF primitive means the host cannot offer any
//! security guarantee. Malformed stored data during verification never
//! raises — it degrades to a failed verification.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error("invalid account data: {0}")]
    Account(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
