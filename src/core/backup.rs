use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, success};
use crate::utils::path::require_absolute;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the event file to `dest_file`, or zip it next to it.
    /// Returns the path of the written backup.
    ///
    /// With `compress` the data file is streamed straight into
    /// `<dest_file stem>.zip`; nothing is written at `dest_file` itself.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = cfg.data_file_path();
        let dest = require_absolute(dest_file, "Backup")?;

        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "data file not found: {}",
                src.display()
            )));
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest
        };

        if target == src {
            return Err(AppError::Backup(format!(
                "backup target is the data file itself: {}",
                target.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → confirmation
        ensure_writable(&target, force)?;

        // 4️⃣ Copy or compress
        if compress {
            compress_into(&src, &target)?;
            success(format!("Compressed backup created: {}", target.display()));
        } else {
            fs::copy(&src, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        Ok(target)
    }
}

/// Write `src` as the single entry of a new .zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("invalid data file path: {}", src.display())))?;

    let mut f = fs::File::open(src)?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(())
}
