//! Adapter implementations
//!
//! Adapters implement the port traits:
//! - JSON documents on the local filesystem for credentials and ledgers
//! - In-memory maps for tests and throwaway sessions

pub(crate) mod json_file;
pub mod json_credentials;
pub mod json_ledger;
pub mod memory;

pub use json_credentials::JsonCredentialStore;
pub use json_ledger::{storage_key, JsonLedgerStore};
pub use memory::{InMemoryCredentialStore, InMemoryLedgerStore};
