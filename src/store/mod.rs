//! The local entity store.
//!
//! # Responsibility
//! - Own the in-memory document and its backend for one session.
//! - Provide collection-scoped CRUD with write-through persistence.
//! - Provide user operations (login, profile, password) over the users
//!   collection.
//!
//! # Invariants
//! - Every mutating call serializes and saves the whole document before
//!   returning.
//! - `update`/`remove` on an absent identifier fail with `NotFound`; they
//!   never silently no-op.
//! - `add`/`import` never check for duplicate identifiers; lookups return
//!   the first match.
//! - Foreign-key fields are never validated here; dangling references are
//!   resolved (or not) at display time by the read views.

use crate::model::document::Document;
use crate::model::user::{ProfileUpdate, User};
use crate::model::EntityId;
use crate::storage::{DocumentBackend, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod records;
pub mod views;

pub use records::Record;
pub use views::{DosimeterDetail, EmployeeDetail, StoreSummary, UNASSIGNED_LABEL};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure taxonomy of the store: record lookup, credential checks and the
/// persistence layer. All failures are synchronous; nothing is retried.
#[derive(Debug)]
pub enum StoreError {
    NotFound {
        collection: &'static str,
        id: EntityId,
    },
    /// No user matches the supplied username/password pair.
    Credentials,
    /// Password change rejected because the current password does not match.
    PasswordMismatch,
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { collection, id } => {
                write!(f, "record not found in {collection}: {id}")
            }
            Self::Credentials => write!(f, "username or password is incorrect"),
            Self::PasswordMismatch => write!(f, "current password does not match"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Explicitly constructed session over the persisted document.
///
/// There is no global instance; callers open a store, pass it where needed
/// and close it at the end of the session. Single-threaded by design.
pub struct EntityStore {
    backend: Box<dyn DocumentBackend>,
    doc: Document,
}

impl EntityStore {
    /// Hydrates a store from the backend.
    ///
    /// Absent or unparseable stored text falls back to the seed document;
    /// pre-versioned documents are migrated in place. Either case persists
    /// the result immediately so the stored blob is canonical afterwards.
    ///
    /// # Errors
    /// - Backend I/O failures.
    /// - A stored schema version newer than this binary supports.
    pub fn open(backend: Box<dyn DocumentBackend>) -> StoreResult<Self> {
        let location = backend.location();
        info!("event=store_open module=store status=start location={location}");

        let (doc, dirty) = match backend.load()? {
            None => {
                info!("event=store_open module=store status=seeded location={location}");
                (Document::seed(), true)
            }
            Some(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Err(err) => {
                    warn!(
                        "event=store_open module=store status=parse_failed location={location} error={err}"
                    );
                    (Document::seed(), true)
                }
                Ok(mut value) => {
                    let migrated = crate::storage::migrations::apply_migrations(&mut value)?;
                    match serde_json::from_value::<Document>(value) {
                        Ok(doc) => (doc, migrated),
                        Err(err) => {
                            warn!(
                                "event=store_open module=store status=decode_failed location={location} error={err}"
                            );
                            (Document::seed(), true)
                        }
                    }
                }
            },
        };

        let store = Self { backend, doc };
        if dirty {
            store.persist()?;
        }
        info!("event=store_open module=store status=ok location={location}");
        Ok(store)
    }

    /// Opens a throwaway store over a fresh in-memory backend.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(Box::new(crate::storage::MemoryBackend::new()))
    }

    /// Flushes and ends the session.
    pub fn close(self) -> StoreResult<()> {
        self.persist()?;
        info!(
            "event=store_close module=store status=ok location={}",
            self.backend.location()
        );
        Ok(())
    }

    /// Read-only view of the whole document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    fn persist(&self) -> StoreResult<()> {
        let text = serde_json::to_string(&self.doc).map_err(StorageError::from)?;
        self.backend.save(&text)?;
        Ok(())
    }

    /// Returns the current collection in insertion order. No pagination, no
    /// filtering; both are caller concerns.
    pub fn list<R: Record>(&self) -> Vec<R> {
        R::slot(&self.doc).to_vec()
    }

    /// First record whose identifier matches, if any.
    pub fn get<R: Record>(&self, id: &str) -> Option<R> {
        R::slot(&self.doc).iter().find(|r| r.id() == id).cloned()
    }

    /// Appends one record and persists. Duplicate identifiers are accepted.
    pub fn add<R: Record>(&mut self, record: R) -> StoreResult<()> {
        R::slot_mut(&mut self.doc).push(record);
        self.persist()
    }

    /// Replaces the first record matching `id` wholesale and persists.
    pub fn update<R: Record>(&mut self, id: &str, record: R) -> StoreResult<()> {
        let rows = R::slot_mut(&mut self.doc);
        match rows.iter().position(|r| r.id() == id) {
            Some(index) => {
                rows[index] = record;
                self.persist()
            }
            None => Err(StoreError::NotFound {
                collection: R::COLLECTION,
                id: id.to_string(),
            }),
        }
    }

    /// Removes the first record matching `id` and persists.
    pub fn remove<R: Record>(&mut self, id: &str) -> StoreResult<()> {
        let rows = R::slot_mut(&mut self.doc);
        match rows.iter().position(|r| r.id() == id) {
            Some(index) => {
                rows.remove(index);
                self.persist()
            }
            None => Err(StoreError::NotFound {
                collection: R::COLLECTION,
                id: id.to_string(),
            }),
        }
    }

    /// Bulk-appends records (spreadsheet ingestion path) and persists once.
    /// No duplicate or referential checks.
    pub fn import<R: Record>(&mut self, records: Vec<R>) -> StoreResult<usize> {
        let count = records.len();
        R::slot_mut(&mut self.doc).extend(records);
        self.persist()?;
        info!(
            "event=store_import module=store status=ok collection={} count={count}",
            R::COLLECTION
        );
        Ok(count)
    }

    /// Exact plaintext credential match over the users collection.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<User> {
        self.doc
            .users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .cloned()
            .ok_or(StoreError::Credentials)
    }

    /// Merges the provided fields onto the located user and persists.
    pub fn update_user_profile(
        &mut self,
        id: &str,
        update: &ProfileUpdate,
    ) -> StoreResult<User> {
        let user = self
            .doc
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: id.to_string(),
            })?;

        if let Some(full_name) = &update.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        let updated = user.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Overwrites the user's password after verifying the current one.
    pub fn change_password(
        &mut self,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> StoreResult<()> {
        let user = self
            .doc
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: id.to_string(),
            })?;

        if user.password != current_password {
            return Err(StoreError::PasswordMismatch);
        }
        user.password = new_password.to_string();
        self.persist()
    }
}
