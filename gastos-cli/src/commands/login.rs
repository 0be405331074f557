//! Login, logout and whoami commands

use std::path::Path;

use anyhow::Result;

use super::{get_context, read_password};
use crate::output;

pub fn run(data_dir: &Path, username: &str, password: Option<String>) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let password = read_password(password, false)?;

    if !ctx.login(username, &password)? {
        anyhow::bail!("Invalid username or password");
    }

    output::success(&format!("Welcome, {}", username));
    Ok(())
}

pub fn run_logout(data_dir: &Path) -> Result<()> {
    let ctx = get_context(data_dir)?;
    match ctx.session_service.current()? {
        Some(username) => {
            ctx.session_service.end()?;
            output::success(&format!("Logged out {}", username));
        }
        None => output::info("No active session"),
    }
    Ok(())
}

pub fn run_whoami(data_dir: &Path) -> Result<()> {
    let ctx = get_context(data_dir)?;
    match ctx.session_service.current()? {
        Some(username) => {
            println!("{}", username);
            Ok(())
        }
        None => anyhow::bail!("Not logged in"),
    }
}
