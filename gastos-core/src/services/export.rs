//! Export service - write ledger entries as CSV or JSON

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Entry, Expense};

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::validation(format!(
                "unknown export format '{}' (expected csv or json)",
                other
            ))),
        }
    }
}

/// Write `entries` to `writer`
///
/// CSV has a `fecha,descripcion,categoria,monto` header with amounts in plain
/// decimal notation. JSON is the same record array the ledger files use, so
/// an export can be dropped back in place as a ledger.
pub fn export_entries<W: Write>(entries: &[Entry], format: ExportFormat, mut writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(["fecha", "descripcion", "categoria", "monto"])?;
            for entry in entries {
                let e = &entry.expense;
                csv.write_record([
                    e.timestamp.as_str(),
                    e.description.as_str(),
                    e.category.as_str(),
                    e.amount.to_string().as_str(),
                ])?;
            }
            csv.flush()?;
        }
        ExportFormat::Json => {
            let expenses: Vec<&Expense> = entries.iter().map(|entry| &entry.expense).collect();
            serde_json::to_writer_pretty(&mut writer, &expenses)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
