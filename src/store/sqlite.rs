// src/store/sqlite.rs
//! SQLite-backed account store
//!
//! One row per account; the credential column holds the stored string in
//! whichever format the account currently has.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::aliases::PlainPassword;
use crate::core::hasher::CredentialHasher;
use crate::error::CoreError;

use super::{AccountStore, Result};

pub struct SqliteAccountStore {
    conn: Connection,
}

impl SqliteAccountStore {
    /// Open (or create) the accounts database at the given path.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        if let Some(parent) = db_path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path.as_ref())?;

        // WAL mode for concurrent reads + crash safety
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS accounts (
                username   TEXT PRIMARY KEY COLLATE NOCASE,
                credential TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT
            );",
        )?;

        Ok(Self { conn })
    }

    /// Create an account with a freshly hashed current-format credential.
    pub fn register(
        &mut self,
        hasher: &CredentialHasher,
        username: &str,
        password: &PlainPassword,
    ) -> Result<()> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Account("username cannot be empty".into()));
        }

        let credential = hasher.create_password_hash(password)?;
        self.conn.execute(
            "INSERT INTO accounts (username, credential) VALUES (?1, ?2)",
            params![trimmed, credential],
        )?;
        Ok(())
    }

    /// Insert a pre-existing stored credential verbatim.
    ///
    /// This is the import path for accounts carried over from a deployment
    /// that still holds legacy-format strings.
    pub fn import_credential(&mut self, username: &str, credential: &str) -> Result<()> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Account("username cannot be empty".into()));
        }

        self.conn.execute(
            "INSERT INTO accounts (username, credential) VALUES (?1, ?2)",
            params![trimmed, credential],
        )?;
        Ok(())
    }

    pub fn account_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl AccountStore for SqliteAccountStore {
    fn stored_credential(&self, username: &str) -> Result<Option<String>> {
        let row: rusqlite::Result<String> = self.conn.query_row(
            "SELECT credential FROM accounts WHERE username = ?1",
            params![username.trim()],
            |row| row.get(0),
        );

        match row {
            Ok(credential) => Ok(Some(credential)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn replace_credential(&mut self, username: &str, credential: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE accounts SET credential = ?1, updated_at = datetime('now')
             WHERE username = ?2",
            params![credential, username.trim()],
        )?;
        Ok(())
    }
}
