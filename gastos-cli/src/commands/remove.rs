//! Remove command - delete an expense by index

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, is_interactive, open_ledger};
use crate::output;

pub fn run(data_dir: &Path, index: usize, force: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let mut ledger = open_ledger(&ctx)?;

    // Out of range is not an error, there is simply nothing to delete
    let Some(expense) = ledger.expenses().get(index).cloned() else {
        output::info(&format!(
            "No expense at index {} ({} recorded)",
            index,
            ledger.len()
        ));
        return Ok(());
    };

    if !force {
        println!(
            "\n{}",
            format!(
                "This will delete '{}' ({}, {}, {}).",
                expense.description,
                ctx.config.format_amount(expense.amount),
                expense.category,
                expense.timestamp
            )
            .yellow()
        );

        if !is_interactive() {
            anyhow::bail!("Refusing to delete without confirmation; pass --force");
        }

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    ledger.remove(index)?;
    output::success(&format!("Deleted '{}'", expense.description));
    // The change is already saved; a bad total must not turn it into a failure
    match ledger.total() {
        Ok(total) => println!("Total: {}", ctx.config.format_amount(total)),
        Err(e) => output::warning(&format!("Could not compute the total: {}", e)),
    }
    Ok(())
}
