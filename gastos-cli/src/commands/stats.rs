//! Stats command - totals per category

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{get_context, open_ledger};
use crate::output;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let ledger = open_ledger(&ctx)?;
    let summary = ledger.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", format!("Expenses for {}", summary.username).bold());
    println!();

    if summary.count == 0 {
        output::info("No expenses recorded");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Category", "Count", "Total"]);
    for row in &summary.by_category {
        table.add_row(vec![
            row.category.as_str().into(),
            output::number_cell(row.count.to_string()),
            output::number_cell(ctx.config.format_amount(row.total)),
        ]);
    }
    println!("{}", table);
    println!();

    println!("{}: {}", "Total".bold(), ctx.config.format_amount(summary.total));
    println!("Expenses: {}", summary.count);
    if let (Some(first), Some(last)) = (&summary.first_recorded, &summary.last_recorded) {
        println!("Date range: {} to {}", first, last);
    }
    println!("{}", format!("Stored in {}", ledger.location()).dimmed());
    Ok(())
}
