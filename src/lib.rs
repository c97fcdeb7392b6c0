//! Local entity store for radiation-safety administrative records.
//!
//! One JSON document holds every collection: employee rosters and their
//! reference tables, dosimeters, training courses, radiation readings and
//! user accounts. The store hydrates it from a single persisted text blob
//! (seeding defaults when nothing usable is stored, migrating legacy
//! shapes), serves collection-scoped CRUD with denormalized read views, and
//! writes the whole document back after every mutation. UI rendering and
//! routing live outside this crate.

pub mod import;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::catalog::{DosimetryAgency, EquipmentType, RadiationSource, TrainingUnit};
pub use model::document::{Document, SCHEMA_VERSION};
pub use model::dosimeter::{Dosimeter, DosimeterStatus};
pub use model::employee::{Department, Employee, Position};
pub use model::radiation::RadiationRecord;
pub use model::training::{CourseStatus, TrainingCourse};
pub use model::user::{ProfileUpdate, User, UserRole};
pub use model::{new_entity_id, EntityId};
pub use storage::{DocumentBackend, FileBackend, MemoryBackend, StorageError};
pub use store::{
    DosimeterDetail, EmployeeDetail, EntityStore, Record, StoreError, StoreResult, StoreSummary,
    UNASSIGNED_LABEL,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
