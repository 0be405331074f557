//! gastos core - business logic for a personal expense tracker
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: expense records, read-side views, error types
//! - **ports**: trait definitions for storage (CredentialStore, LedgerStore)
//! - **services**: auth, ledger, session and export logic
//! - **adapters**: JSON-file and in-memory implementations of the ports
//!
//! Credentials are stored and compared in plaintext. This is a convenience
//! gate between local profiles, not security.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use adapters::{JsonCredentialStore, JsonLedgerStore};
use config::Config;
use ports::{CredentialStore, LedgerStore};
use services::{AuthService, ExpenseLedger, SessionService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{CategoryTotal, Entry, Expense, LedgerSummary};

/// Main context for gastos operations
///
/// Holds the configuration, the stores for one data directory, and the
/// services built on them. Ledgers are opened per user on demand.
pub struct GastosContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub auth_service: AuthService,
    pub session_service: SessionService,
    ledger_store: Arc<dyn LedgerStore>,
}

impl GastosContext {
    /// Create a context over `data_dir`, creating the directory if needed
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let config = Config::load(data_dir)?;

        let credentials: Arc<dyn CredentialStore> = Arc::new(JsonCredentialStore::in_dir(data_dir));
        let ledger_store: Arc<dyn LedgerStore> = Arc::new(JsonLedgerStore::in_dir(data_dir));

        Ok(Self::with_stores(config, data_dir, credentials, ledger_store))
    }

    /// Create a context over explicit stores
    pub fn with_stores(
        config: Config,
        data_dir: &Path,
        credentials: Arc<dyn CredentialStore>,
        ledger_store: Arc<dyn LedgerStore>,
    ) -> Self {
        Self {
            config,
            data_dir: data_dir.to_path_buf(),
            auth_service: AuthService::new(credentials),
            session_service: SessionService::new(data_dir),
            ledger_store,
        }
    }

    /// Open `username`'s ledger, applying the configured category policy
    pub fn open_ledger(&self, username: &str) -> Result<ExpenseLedger> {
        let ledger = ExpenseLedger::open(username, Arc::clone(&self.ledger_store))?;
        if self.config.strict_categories {
            Ok(ledger.restrict_categories(self.config.categories.clone()))
        } else {
            Ok(ledger)
        }
    }

    /// Open the ledger of the logged-in user
    pub fn open_session_ledger(&self) -> Result<ExpenseLedger> {
        let username = self.session_service.require()?;
        self.open_ledger(&username)
    }

    /// Check credentials and, on success, start a session
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        if !self.auth_service.login(username, password)? {
            return Ok(false);
        }
        self.session_service.start(username)?;
        Ok(true)
    }
}
