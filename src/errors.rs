//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage '{source_name}' is corrupt: {reason}")]
    StorageCorrupt { source_name: String, reason: String },

    #[error("Failed to write storage '{target}' (the last record may be lost on restart): {source}")]
    StorageWrite {
        target: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

impl AppError {
    pub fn corrupt(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::StorageCorrupt {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
