//! Document persistence bootstrap.
//!
//! # Responsibility
//! - Define the backend contract for the single persisted text blob.
//! - Surface serialization, I/O and schema-version failures as one error
//!   type.
//!
//! # Invariants
//! - The whole document is written back on every save; there is no partial
//!   or batched persistence.
//! - Documents newer than the migration registry are rejected, never
//!   overwritten.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod backend;
pub mod migrations;

pub use backend::{DocumentBackend, FileBackend, MemoryBackend};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    UnsupportedSchemaVersion {
        stored: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                stored,
                latest_supported,
            } => write!(
                f,
                "stored document schema version {stored} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
