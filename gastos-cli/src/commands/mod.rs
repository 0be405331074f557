//! CLI command implementations

pub mod add;
pub mod categories;
pub mod config;
pub mod export;
pub mod list;
pub mod login;
pub mod register;
pub mod remove;
pub mod stats;
pub mod total;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Password;
use gastos_core::services::ExpenseLedger;
use gastos_core::GastosContext;

/// Data directory from --data-dir / GASTOS_DIR, or ~/.gastos
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("Could not find home directory; set GASTOS_DIR")?;
    Ok(home.join(".gastos"))
}

/// Build the context for a data directory
pub fn get_context(data_dir: &Path) -> Result<GastosContext> {
    GastosContext::new(data_dir)
        .with_context(|| format!("Failed to open gastos data directory: {}", data_dir.display()))
}

/// Whether we can prompt the user
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Password from the flag/env, a prompt, or one line of piped stdin
pub fn read_password(given: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = given {
        return Ok(password);
    }

    if is_interactive() {
        let mut prompt = Password::new().with_prompt("Password").allow_empty_password(true);
        if confirm {
            prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
        }
        return Ok(prompt.interact()?);
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Open the logged-in user's ledger with a hint when nobody is logged in
pub fn open_ledger(ctx: &GastosContext) -> Result<ExpenseLedger> {
    match ctx.open_session_ledger() {
        Err(gastos_core::Error::NotLoggedIn) => {
            anyhow::bail!("Not logged in. Run `gastos login <username>` first.")
        }
        other => Ok(other?),
    }
}
