//! Core domain entities
//!
//! Plain data plus validation. No I/O happens here.

mod expense;
mod summary;
pub mod result;

pub use expense::{
    now_timestamp, parse_amount, validate_amount, Expense, AMOUNT_DECIMALS, AMOUNT_LIMIT, TIMESTAMP_FORMAT,
};
pub use summary::{CategoryTotal, Entry, LedgerSummary};
