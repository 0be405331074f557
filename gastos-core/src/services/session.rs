//! Session service - remembers who is logged in between commands

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Session file name inside the data directory
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionFile {
    username: String,
}

/// Session service backed by `<data_dir>/session.json`
pub struct SessionService {
    path: PathBuf,
}

impl SessionService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Record `username` as the logged-in user, replacing any previous session
    pub fn start(&self, username: &str) -> Result<()> {
        let session = SessionFile {
            username: username.to_string(),
        };
        let content = serde_json::to_string_pretty(&session)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// The logged-in user, if any
    ///
    /// An unreadable session file counts as logged out.
    pub fn current(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<SessionFile>(&content) {
            Ok(session) => Ok(Some(session.username)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    /// The logged-in user, or `Error::NotLoggedIn`
    pub fn require(&self) -> Result<String> {
        self.current()?.ok_or(Error::NotLoggedIn)
    }

    /// Log out. Returns whether a session existed.
    pub fn end(&self) -> Result<bool> {
        let had_session = self.current()?.is_some();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(had_session)
    }
}
