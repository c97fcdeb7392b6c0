//! Backends for the single persisted text blob.
//!
//! # Responsibility
//! - File-backed persistence for real sessions, memory-backed for tests and
//!   throwaway sessions.
//!
//! # Invariants
//! - `load` returning `None` means "nothing stored yet", which callers turn
//!   into a seeded document; it is never an error.

use super::StorageResult;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Contract for the one storage location holding the serialized document.
pub trait DocumentBackend {
    /// Reads the stored text, or `None` when nothing has been written yet.
    fn load(&self) -> StorageResult<Option<String>>;
    /// Replaces the stored text with the full serialized document.
    fn save(&self, text: &str) -> StorageResult<()>;
    /// Human-readable location used in log events.
    fn location(&self) -> String;
}

/// One text file at a fixed path.
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
}

impl DocumentBackend for FileBackend {
    fn load(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, text: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory blob for tests and non-persistent sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    cell: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts pre-populated, simulating an existing stored document.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            cell: RefCell::new(Some(text.into())),
        }
    }

    /// Snapshot of the currently stored text.
    pub fn stored(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl DocumentBackend for MemoryBackend {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.cell.borrow().clone())
    }

    fn save(&self, text: &str) -> StorageResult<()> {
        *self.cell.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
