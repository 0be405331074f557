//! Add command - record an expense

use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};

use super::{get_context, is_interactive, open_ledger};
use crate::output;

pub fn run(
    data_dir: &Path,
    description: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let mut ledger = open_ledger(&ctx)?;

    let prompting = description.is_none() || amount.is_none();
    if prompting && !is_interactive() {
        anyhow::bail!("Description and amount are required when not running in a terminal");
    }

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?,
    };

    let amount: String = match amount {
        Some(a) => a,
        None => Input::new()
            .with_prompt("Amount (e.g. 12.50)")
            .interact_text()?,
    };

    let category = match category {
        Some(c) => c,
        None if prompting && !ctx.config.categories.is_empty() => {
            let choice = Select::new()
                .with_prompt("Category")
                .items(&ctx.config.categories)
                .default(ctx.config.categories.len() - 1)
                .interact()?;
            ctx.config.categories[choice].clone()
        }
        None => ctx.config.default_category().to_string(),
    };

    let expense = ledger.add_raw(&description, &amount, &category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&expense)?);
        return Ok(());
    }

    output::success(&format!(
        "Added '{}' ({}, {})",
        expense.description,
        ctx.config.format_amount(expense.amount),
        expense.category
    ));
    // The change is already saved; a bad total must not turn it into a failure
    match ledger.total() {
        Ok(total) => println!("Total: {}", ctx.config.format_amount(total)),
        Err(e) => output::warning(&format!("Could not compute the total: {}", e)),
    }
    Ok(())
}
