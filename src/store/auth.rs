//! Authentication state store.
//!
//! Holds the signed-in user, the bearer token and two session flags.
//! The subset `{user, token, is_authenticated}` is written to a named
//! JSON storage entry after every mutation so a session survives a
//! restart; the two-factor flag is deliberately session-only. A legacy
//! plain token entry from the pre-store era is removed on logout.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the persisted storage entry.
const STORAGE_ENTRY: &str = "auth-storage.json";
/// Legacy token entry, written by older portal builds. Only ever removed.
const LEGACY_TOKEN_ENTRY: &str = "token";

/// The signed-in user. Replaced wholesale on login, cleared on logout.
///
/// `cpf` is filled from the identity provider's subject identifier,
/// which for this provider typically holds the national identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub cpf: String,
}

/// Subset of the store that survives restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedAuth {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
}

#[derive(Debug)]
pub struct AuthStore {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
    requires_two_factor: bool,
    dir: PathBuf,
}

impl AuthStore {
    /// Open the store backed by `dir`, restoring the persisted subset if
    /// a previous session left one behind. The two-factor flag always
    /// starts false.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let persisted = match fs::read_to_string(dir.join(STORAGE_ENTRY)) {
            Ok(raw) => serde_json::from_str::<PersistedAuth>(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => PersistedAuth::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            user: persisted.user,
            token: persisted.token,
            is_authenticated: persisted.is_authenticated,
            requires_two_factor: false,
            dir,
        })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn requires_two_factor(&self) -> bool {
        self.requires_two_factor
    }

    /// Store the user and mark the session authenticated.
    pub fn set_user(&mut self, user: User) -> Result<(), StoreError> {
        self.user = Some(user);
        self.is_authenticated = true;
        self.persist()
    }

    /// Store the bearer token. Does not touch the authenticated flag;
    /// callers pairing token and flag must call both setters.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), StoreError> {
        self.token = Some(token.into());
        self.persist()
    }

    /// Session-only flag, never persisted.
    pub fn set_requires_two_factor(&mut self, required: bool) {
        self.requires_two_factor = required;
    }

    /// Clear user, token and both flags, and drop the legacy token entry.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.requires_two_factor = false;
        self.persist()?;
        remove_if_present(&self.dir.join(LEGACY_TOKEN_ENTRY))?;
        tracing::info!("Session cleared");
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = PersistedAuth {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(self.dir.join(STORAGE_ENTRY), raw)?;
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
