//! Total command - show the amount spent

use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{get_context, open_ledger};

#[derive(Debug, Serialize)]
struct TotalOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

pub fn run(data_dir: &Path, category: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let ledger = open_ledger(&ctx)?;

    let result = TotalOutput {
        category,
        count: ledger.list(category).len(),
        total: ledger.total_for(category)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", ctx.config.format_amount(result.total));
    Ok(())
}
