//! Export command - write expenses as CSV or JSON

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gastos_core::services::{export_entries, ExportFormat};

use super::{get_context, open_ledger};

pub fn run(data_dir: &Path, format: &str, category: Option<&str>, output: Option<PathBuf>) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let ctx = get_context(data_dir)?;
    let ledger = open_ledger(&ctx)?;
    let entries = ledger.list(category);

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            export_entries(&entries, format, BufWriter::new(file))?;
            eprintln!("Exported {} expense(s) to {}", entries.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            export_entries(&entries, format, stdout.lock())?;
        }
    }
    Ok(())
}
