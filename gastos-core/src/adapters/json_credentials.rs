//! JSON file credential store
//!
//! One shared document, `{ "<username>": "<password>", ... }`. Passwords are
//! plaintext. Registration is a read-modify-write of the whole document, so it
//! holds an advisory lock on a sidecar `.lock` file for its duration; logins
//! only read.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::json_file::{read_json, write_json_atomic};
use crate::domain::result::Result;
use crate::ports::CredentialStore;

/// Default file name inside the data directory
pub const USERS_FILE: &str = "usuarios.json";

type UserMap = BTreeMap<String, String>;

/// Credential store backed by a single JSON document
#[derive(Debug, Clone)]
pub struct JsonCredentialStore {
    path: PathBuf,
}

impl JsonCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/usuarios.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(USERS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<UserMap> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Exclusive advisory lock, released when the returned handle is dropped
    fn lock(&self) -> Result<File> {
        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(PathBuf::from(lock_path))?;
        FileExt::lock_exclusive(&file)?;
        Ok(file)
    }
}

impl CredentialStore for JsonCredentialStore {
    fn register(&self, username: &str, password: &str) -> Result<bool> {
        let _guard = self.lock()?;

        let mut users = self.load()?;
        if users.contains_key(username) {
            return Ok(false);
        }
        users.insert(username.to_string(), password.to_string());
        write_json_atomic(&self.path, &users)?;

        tracing::debug!(path = %self.path.display(), users = users.len(), "saved credentials");
        Ok(true)
    }

    fn validate(&self, username: &str, password: &str) -> Result<bool> {
        let users = self.load()?;
        Ok(users.get(username).is_some_and(|stored| stored == password))
    }

    fn contains(&self, username: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(username))
    }
}
