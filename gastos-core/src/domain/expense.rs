//! Expense domain model

use std::str::FromStr;

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Format of the `fecha` field, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Amounts must stay below this many whole units
///
/// Ledger documents store amounts as JSON numbers (f64). Up to 10^13 with at
/// most two decimal places, every amount reads back exactly and no realistic
/// ledger total can overflow a `Decimal`.
pub const AMOUNT_LIMIT: i64 = 10_000_000_000_000;

/// Decimal places an amount may carry
pub const AMOUNT_DECIMALS: u32 = 2;

/// A single expense entry in a user's ledger
///
/// Field names on disk are the ones the ledger documents have always used
/// (`descripcion`, `monto`, `categoria`, `fecha`). The amount is written as a
/// plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "fecha")]
    pub timestamp: String,
}

impl Expense {
    /// Create an expense stamped with the current local time
    ///
    /// The amount is not checked here; the ledger runs [`validate_amount`]
    /// before a record is ever built.
    pub fn new(description: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self::with_timestamp(description, amount, category, now_timestamp())
    }

    /// Create an expense with an explicit timestamp
    pub fn with_timestamp(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse user-entered amount text (`"12.50"`, `" 3 "`, `"1e2"`)
///
/// Rejects anything that is not a number, plus anything
/// [`validate_amount`] rejects.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_amount("amount is required"));
    }

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::invalid_amount(format!("'{}' is not a number", trimmed)))?;

    validate_amount(amount)
}

/// Accept amounts in `(0, AMOUNT_LIMIT)` with at most two decimal places
///
/// Trailing zeros do not count as decimal places, so `3.500` is accepted.
pub fn validate_amount(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_amount(format!(
            "amount must be greater than 0 (got {})",
            amount
        )));
    }
    if amount >= Decimal::from(AMOUNT_LIMIT) {
        return Err(Error::invalid_amount(format!(
            "amount must be less than {} (got {})",
            AMOUNT_LIMIT, amount
        )));
    }
    if amount.normalize().scale() > AMOUNT_DECIMALS {
        return Err(Error::invalid_amount(format!(
            "amount can have at most {} decimal places (got {})",
            AMOUNT_DECIMALS, amount
        )));
    }
    Ok(amount)
}
