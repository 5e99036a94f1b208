pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::store::oplog;
use crate::ui::messages::warning;

/// Write an operation-log line; a failure is only a warning.
pub(crate) fn record_op(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = oplog::record(&cfg.oplog_file_path(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
