//! Categories command - list categories in use

use std::path::Path;

use anyhow::Result;

use super::{get_context, open_ledger};
use crate::output;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let ledger = open_ledger(&ctx)?;
    let categories = ledger.categories();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        output::info("No categories in use yet");
        println!("Suggested: {}", ctx.config.categories.join(", "));
        return Ok(());
    }

    for category in &categories {
        println!("{}", category);
    }
    Ok(())
}
