// src/store/mod.rs
//! Account credential storage and the login workflow
//!
//! The hasher itself never touches persistence. These are the collaborators
//! that own the single stored-credential string per account, plus the login
//! composition that performs the lazy upgrade of legacy credentials.

mod memory;
mod sqlite;

pub use memory::MemoryAccountStore;
pub use sqlite::SqliteAccountStore;

use crate::aliases::{PlainPassword, Salt16};
use crate::core::hasher::CredentialHasher;
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Minimal contract an account backend must offer the login flow.
pub trait AccountStore {
    /// The stored credential string for a username, if the account exists.
    fn stored_credential(&self, username: &str) -> Result<Option<String>>;

    /// Replace an account's credential, e.g. after a lazy upgrade.
    fn replace_credential(&mut self, username: &str, credential: &str) -> Result<()>;
}

/// What a login attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub valid: bool,
    pub upgraded: bool,
}

/// Verify a password for an account, upgrading legacy credentials in place
/// on success.
///
/// A login against a legacy-format credential that verifies correctly is
/// immediately re-hashed with a fresh salt and written back, so the weak
/// format retires one account at a time without a bulk migration pass.
pub fn login<S: AccountStore>(
    store: &mut S,
    hasher: &CredentialHasher,
    username: &str,
    password: &PlainPassword,
) -> Result<LoginOutcome> {
    let stored = match store.stored_credential(username)? {
        Some(stored) => stored,
        None => {
            // Dummy derivation so unknown usernames cost as much as wrong passwords
            let _ = hasher.hash_password_with_salt(password, &Salt16::new([0u8; 16]))?;
            return Ok(LoginOutcome {
                valid: false,
                upgraded: false,
            });
        }
    };

    let outcome = hasher.verify_password_with_legacy(password, &stored);
    if !outcome.valid {
        return Ok(LoginOutcome {
            valid: false,
            upgraded: false,
        });
    }

    let mut upgraded = false;
    if outcome.needs_upgrade {
        let replacement = hasher.create_password_hash(password)?;
        store.replace_credential(username, &replacement)?;
        tracing::info!(username = username, "credential upgraded to current format");
        upgraded = true;
    }

    Ok(LoginOutcome {
        valid: true,
        upgraded,
    })
}
