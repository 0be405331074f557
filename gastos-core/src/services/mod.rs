//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod auth;
pub mod export;
mod ledger;
mod session;

pub use auth::AuthService;
pub use export::{export_entries, ExportFormat};
pub use ledger::ExpenseLedger;
pub use session::{SessionService, SESSION_FILE};
