//! Credential store port - username to password mapping

use crate::domain::result::Result;

/// Durable mapping from username to password
///
/// Passwords are stored and compared as plain strings. Every implementation
/// lives behind this trait so that moving to salted hashes only touches the
/// adapter.
pub trait CredentialStore: Send + Sync {
    /// Register a new username
    ///
    /// Returns `Ok(false)` without writing anything if the username is
    /// already taken.
    fn register(&self, username: &str, password: &str) -> Result<bool>;

    /// Check a username/password pair
    ///
    /// Exact, case-sensitive comparison. An unknown username is `Ok(false)`.
    fn validate(&self, username: &str, password: &str) -> Result<bool>;

    /// Whether the username is registered
    fn contains(&self, username: &str) -> Result<bool>;
}
