//! JSON file ledger store - one document per user

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::json_file::{read_json, write_json_atomic};
use crate::domain::result::Result;
use crate::domain::Expense;
use crate::ports::LedgerStore;

/// Sub-directory of the data directory holding ledger documents
pub const LEDGERS_DIR: &str = "ledgers";

/// Hex characters of the username digest kept in the file name
const KEY_LEN: usize = 32;

/// Derive the storage key for a username
///
/// The username is hashed rather than interpolated, so names containing path
/// separators, `..`, or characters the filesystem rejects all map to a safe,
/// stable file name. Two usernames differing only in case get different keys.
pub fn storage_key(username: &str) -> String {
    let digest = Sha256::digest(username.as_bytes());
    let hex = hex::encode(digest);
    format!("gastos_{}.json", &hex[..KEY_LEN])
}

/// Ledger store writing `<dir>/gastos_<key>.json`
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    dir: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at `<data_dir>/ledgers/`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(LEDGERS_DIR))
    }

    /// Path of the document holding `username`'s ledger
    pub fn path_for(&self, username: &str) -> PathBuf {
        self.dir.join(storage_key(username))
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self, username: &str) -> Result<Option<Vec<Expense>>> {
        let path = self.path_for(username);
        let expenses: Option<Vec<Expense>> = read_json(&path)?;
        tracing::debug!(
            path = %path.display(),
            records = expenses.as_ref().map_or(0, Vec::len),
            "loaded ledger"
        );
        Ok(expenses)
    }

    fn save(&self, username: &str, expenses: &[Expense]) -> Result<()> {
        let path = self.path_for(username);
        write_json_atomic(&path, expenses)?;
        tracing::debug!(path = %path.display(), records = expenses.len(), "saved ledger");
        Ok(())
    }

    fn location(&self, username: &str) -> String {
        self.path_for(username).display().to_string()
    }
}
