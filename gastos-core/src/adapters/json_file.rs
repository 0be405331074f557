//! Whole-document JSON file I/O shared by the file-backed stores
//!
//! Every read loads the full document, every write replaces it. Writes go to
//! a temporary file in the same directory which is then renamed over the
//! target, so a failed write never leaves a truncated document behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};

/// Read and parse a JSON document
///
/// Returns `Ok(None)` if the file does not exist or holds only whitespace.
/// A document that exists but does not parse is `Error::CorruptStore`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::corrupt(path, e))
}

/// Serialize `value` as pretty JSON (two-space indent, UTF-8 kept literal)
/// and atomically replace `path`
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let content = serde_json::to_string_pretty(value)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    Ok(())
}
