//! Storage backends for the event store.
//!
//! The store only ever reads the whole content or replaces it, so a backend
//! is nothing more than a byte slot.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub trait StorageBackend {
    /// Full content of the store, `None` if it does not exist yet.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the full content of the store.
    fn write(&self, content: &[u8]) -> io::Result<()>;

    /// Human-readable name used in messages and in the operation log.
    fn describe(&self) -> String;
}

/// File-backed store used in production.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling used while writing: the full file name plus `.tmp`
    /// (`log.csv` → `log.csv.tmp`), so it never equals the target.
    pub fn temp_path(&self) -> io::Result<PathBuf> {
        let mut name = self
            .path
            .file_name()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a file path: {}", self.path.display()),
                )
            })?
            .to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write to the temp sibling, sync it, then rename it over the target.
    /// The target is either the old or the new version, never a partial one.
    fn write(&self, content: &[u8]) -> io::Result<()> {
        let temp_path = self.temp_path()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let result = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(content)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if result.is_err() {
            fs::remove_file(&temp_path).ok();
        }
        result
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store for tests.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(content.into()))),
        }
    }

    pub fn content(&self) -> Option<Vec<u8>> {
        self.slot.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, content: &[u8]) -> io::Result<()> {
        *self.slot.borrow_mut() = Some(content.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
