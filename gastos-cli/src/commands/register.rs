//! Register command - create a new user

use std::path::Path;

use anyhow::Result;

use super::{get_context, read_password};
use crate::output;

pub fn run(data_dir: &Path, username: &str, password: Option<String>) -> Result<()> {
    let ctx = get_context(data_dir)?;

    // Fail before prompting for a password nobody will use
    if ctx.auth_service.exists(username)? {
        anyhow::bail!("User '{}' already exists", username);
    }

    let password = read_password(password, true)?;
    if !ctx.auth_service.register(username, &password)? {
        anyhow::bail!("User '{}' already exists", username);
    }

    output::success(&format!("User '{}' registered", username));
    if password.is_empty() {
        output::warning("The password is empty; anyone can log in as this user");
    }
    println!("Log in with: gastos login {}", username);
    Ok(())
}
