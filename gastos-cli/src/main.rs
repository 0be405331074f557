//! gastos CLI - personal expenses in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{add, categories, config, export, list, login, register, remove, stats, total};

/// gastos - track personal expenses from your terminal
#[derive(Parser)]
#[command(name = "gastos", version, about, long_about = None)]
struct Cli {
    /// Data directory (default: ~/.gastos)
    #[arg(long, global = true, env = "GASTOS_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new user
    Register {
        /// Username
        username: String,
        /// Password (prompted if omitted)
        #[arg(long, env = "GASTOS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and start a session
    Login {
        /// Username
        username: String,
        /// Password (prompted if omitted)
        #[arg(long, env = "GASTOS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Record an expense
    Add {
        /// What the money was spent on (prompted if omitted)
        description: Option<String>,
        /// Amount, e.g. 12.50 (prompted if omitted)
        amount: Option<String>,
        /// Category (defaults to the last configured category)
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List expenses
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an expense by its index (as shown by `list`)
    Remove {
        /// Index of the expense
        index: usize,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// List categories in use
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the total spent
    Total {
        /// Only total this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show totals per category
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Config {
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Only accept configured categories (true or false)
        #[arg(long)]
        strict: Option<bool>,
        /// Add a suggested category (repeatable)
        #[arg(long = "add-category", value_name = "CATEGORY")]
        add_category: Vec<String>,
        /// Remove a suggested category (repeatable)
        #[arg(long = "remove-category", value_name = "CATEGORY")]
        remove_category: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export expenses as CSV or JSON
    Export {
        /// Output format
        #[arg(long, default_value = "csv")]
        format: String,
        /// Only export this category
        #[arg(short, long)]
        category: Option<String>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            if !is_user_error(&e) {
                eprintln!("Run with GASTOS_LOG=debug for more detail");
            }
            ExitCode::FAILURE
        }
    }
}

/// Whether the failure is bad input rather than a storage or system problem
///
/// Errors raised by the CLI itself (`bail!`) count as input problems.
fn is_user_error(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<gastos_core::Error>())
        .all(gastos_core::Error::is_user_error)
}

/// Diagnostics go to stderr, filtered by GASTOS_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("GASTOS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = commands::resolve_data_dir(cli.data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    match cli.command {
        Commands::Register { username, password } => register::run(&data_dir, &username, password),
        Commands::Login { username, password } => login::run(&data_dir, &username, password),
        Commands::Logout => login::run_logout(&data_dir),
        Commands::Whoami => login::run_whoami(&data_dir),
        Commands::Add { description, amount, category, json } => {
            add::run(&data_dir, description, amount, category, json)
        }
        Commands::List { category, json } => list::run(&data_dir, category.as_deref(), json),
        Commands::Remove { index, force } => remove::run(&data_dir, index, force),
        Commands::Categories { json } => categories::run(&data_dir, json),
        Commands::Total { category, json } => total::run(&data_dir, category.as_deref(), json),
        Commands::Stats { json } => stats::run(&data_dir, json),
        Commands::Config {
            currency,
            strict,
            add_category,
            remove_category,
            json,
        } => config::run(
            &data_dir,
            config::ConfigChanges {
                currency_symbol: currency,
                strict,
                add_categories: add_category,
                remove_categories: remove_category,
            },
            json,
        ),
        Commands::Export { format, category, output } => {
            export::run(&data_dir, &format, category.as_deref(), output)
        }
    }
}
