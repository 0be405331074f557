//! Ledger store port - per-user expense documents

use crate::domain::result::Result;
use crate::domain::Expense;

/// Persistence for one ordered list of expenses per username
pub trait LedgerStore: Send + Sync {
    /// Load a user's expenses
    ///
    /// `Ok(None)` means nothing has been stored for this user yet. A store
    /// that exists but cannot be parsed is an error, never `None`.
    fn load(&self, username: &str) -> Result<Option<Vec<Expense>>>;

    /// Replace a user's stored expenses with `expenses`
    fn save(&self, username: &str, expenses: &[Expense]) -> Result<()>;

    /// Human-readable location of a user's ledger (for messages)
    fn location(&self, username: &str) -> String;
}
