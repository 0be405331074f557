//! Read-side views over a ledger

use rust_decimal::Decimal;
use serde::Serialize;

use super::Expense;

/// An expense together with its position in the full ledger
///
/// Filtered listings keep the original index so a delete issued from a
/// filtered view removes the right record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub index: usize,
    #[serde(flatten)]
    pub expense: Expense,
}

/// Subtotal for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Totals over a whole ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub username: String,
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Categories in use, sorted
    pub categories: Vec<String>,
    /// One entry per category, same order as `categories`
    pub by_category: Vec<CategoryTotal>,
    pub first_recorded: Option<String>,
    pub last_recorded: Option<String>,
}
