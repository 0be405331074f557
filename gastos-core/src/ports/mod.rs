//! Port definitions (hexagonal architecture)
//!
//! The services depend only on these traits. Adapters provide the
//! file-backed and in-memory implementations.

mod credential_store;
mod ledger_store;

pub use credential_store::CredentialStore;
pub use ledger_store::LedgerStore;
