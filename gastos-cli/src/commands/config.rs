//! Config command - show or change settings.json

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

/// Requested edits; all empty means "just show"
pub struct ConfigChanges {
    pub currency_symbol: Option<String>,
    pub strict: Option<bool>,
    pub add_categories: Vec<String>,
    pub remove_categories: Vec<String>,
}

pub fn run(data_dir: &Path, changes: ConfigChanges, json: bool) -> Result<()> {
    let mut ctx = get_context(data_dir)?;
    let config = &mut ctx.config;
    let mut changed = false;

    if let Some(symbol) = changes.currency_symbol {
        config.currency_symbol = symbol;
        changed = true;
    }
    if let Some(strict) = changes.strict {
        config.strict_categories = strict;
        changed = true;
    }
    for category in &changes.add_categories {
        changed |= config.add_category(category)?;
    }
    for category in &changes.remove_categories {
        if config.remove_category(category) {
            changed = true;
        } else if !json {
            output::warning(&format!("'{}' is not a configured category", category));
        }
    }

    if changed {
        config.save(data_dir)?;
        if !json {
            output::success("Settings saved");
        }
    }

    if json {
        let value = serde_json::json!({
            "categories": config.categories,
            "strictCategories": config.strict_categories,
            "currencySymbol": config.currency_symbol,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Settings".bold());
    println!("  Categories:        {}", config.categories.join(", "));
    println!("  Default category:  {}", config.default_category());
    println!("  Strict categories: {}", config.strict_categories);
    println!("  Currency symbol:   {}", config.currency_symbol);
    Ok(())
}
