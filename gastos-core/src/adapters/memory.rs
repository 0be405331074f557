//! In-memory stores
//!
//! Same contracts as the JSON stores without touching the filesystem. Used by
//! service tests and by callers that want a throwaway ledger.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::domain::result::Result;
use crate::domain::Expense;
use crate::ports::{CredentialStore, LedgerStore};

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Credential store held in a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: Mutex<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn register(&self, username: &str, password: &str) -> Result<bool> {
        let mut users = guard(&self.users);
        if users.contains_key(username) {
            return Ok(false);
        }
        users.insert(username.to_string(), password.to_string());
        Ok(true)
    }

    fn validate(&self, username: &str, password: &str) -> Result<bool> {
        Ok(guard(&self.users)
            .get(username)
            .is_some_and(|stored| stored == password))
    }

    fn contains(&self, username: &str) -> Result<bool> {
        Ok(guard(&self.users).contains_key(username))
    }
}

/// Ledger store held in a `HashMap`, counting writes
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    ledgers: Mutex<HashMap<String, Vec<Expense>>>,
    saves: AtomicUsize,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self, username: &str) -> Result<Option<Vec<Expense>>> {
        Ok(guard(&self.ledgers).get(username).cloned())
    }

    fn save(&self, username: &str, expenses: &[Expense]) -> Result<()> {
        guard(&self.ledgers).insert(username.to_string(), expenses.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self, username: &str) -> String {
        format!("memory:{}", username)
    }
}
