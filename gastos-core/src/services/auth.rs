//! Auth service - registration and login against a credential store

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::ports::CredentialStore;

/// Auth service wrapping a [`CredentialStore`]
///
/// Passwords are compared as plain strings; see the store for details.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// Returns `Ok(false)` if the username is taken. Blank usernames are
    /// rejected; passwords are accepted as given.
    pub fn register(&self, username: &str, password: &str) -> Result<bool> {
        if username.trim().is_empty() {
            return Err(Error::validation("username cannot be empty"));
        }

        let created = self.store.register(username, password)?;
        if created {
            tracing::info!(user = %username, "registered user");
        } else {
            tracing::info!(user = %username, "registration refused: username taken");
        }
        Ok(created)
    }

    /// Check credentials; `Ok(false)` for a wrong password or unknown user
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        let ok = self.store.validate(username, password)?;
        if ok {
            tracing::info!(user = %username, "login succeeded");
        } else {
            tracing::info!(user = %username, "login failed");
        }
        Ok(ok)
    }

    /// Whether `username` is registered
    pub fn exists(&self, username: &str) -> Result<bool> {
        self.store.contains(username)
    }
}
