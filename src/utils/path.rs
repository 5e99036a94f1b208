//! Path utilities: expand ~, validate absolute output paths.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `path` and require it to be absolute (export / backup targets).
pub fn require_absolute(path: &str, what: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if !p.is_absolute() {
        return Err(AppError::Io(std::io::Error::other(format!(
            "{what} path must be absolute: {path}"
        ))));
    }
    Ok(p)
}
