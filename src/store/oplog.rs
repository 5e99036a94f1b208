//! Internal operation log: one CSV line per state-changing command.

use crate::errors::AppResult;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpLogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the operation log at `path`.
pub fn record(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    // a missing or zero-byte log still needs its header row
    let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = WriterBuilder::new().has_headers(is_new).from_writer(file);
    wtr.serialize(OpLogEntry {
        date: now,
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;

    Ok(())
}

/// Read every entry in file order. A missing log is an empty log.
pub fn read_all(path: &Path) -> AppResult<Vec<OpLogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut entries: Vec<OpLogEntry> = Vec::new();
    for row in rdr.deserialize::<OpLogEntry>() {
        entries.push(row?);
    }
    Ok(entries)
}
