//! List command - show expenses

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{get_context, open_ledger};
use crate::output;

pub fn run(data_dir: &Path, category: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let ledger = open_ledger(&ctx)?;
    let entries = ledger.list(category);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        match category {
            Some(c) => output::info(&format!("No expenses in category '{}'", c)),
            None => output::info("No expenses recorded"),
        }
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Date", "Description", "Category", "Amount"]);
    for entry in &entries {
        let e = &entry.expense;
        table.add_row(vec![
            output::number_cell(entry.index.to_string()),
            e.timestamp.as_str().into(),
            e.description.as_str().into(),
            e.category.as_str().into(),
            output::number_cell(ctx.config.format_amount(e.amount)),
        ]);
    }
    println!("{}", table);

    let label = match category {
        Some(c) => format!("Total ({})", c),
        None => "Total".to_string(),
    };
    println!(
        "{}: {}",
        label.bold(),
        ctx.config.format_amount(ledger.total_for(category)?)
    );
    Ok(())
}
