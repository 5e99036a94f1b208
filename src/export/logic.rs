// src/export/logic.rs

use crate::core::aggregate;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EventExport, SummaryExport};
use crate::models::Event;
use crate::ui::messages::warning;
use crate::utils::path::require_absolute;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// every event, most recent first
    Events,
    /// per-owner cumulative counts
    Summary,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export `events` (or their summary) to `file`.
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        events: &[Event],
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = require_absolute(file, "Output file")?;

        if events.is_empty() {
            warning("No events recorded, nothing to export.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        match kind {
            ExportKind::Events => {
                let rows: Vec<EventExport> = aggregate::sorted_by_time_descending(events)
                    .iter()
                    .map(EventExport::from)
                    .collect();
                write_rows(&rows, format, &path)?;
            }
            ExportKind::Summary => {
                let rows: Vec<SummaryExport> = aggregate::cumulative_counts(events)
                    .iter()
                    .map(|(owner, counts)| SummaryExport::new(owner, counts))
                    .collect();
                write_rows(&rows, format, &path)?;
            }
        }

        Ok(Some(path))
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
