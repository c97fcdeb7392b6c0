//! Canonical domain model for radiation-safety records.
//!
//! # Responsibility
//! - Define one canonical shape per entity, resolving the divergent legacy
//!   variants into a single schema.
//! - Keep status vocabularies closed (enums), never free-form strings.
//!
//! # Invariants
//! - Every entity carries a stable opaque `EntityId`, unique within its
//!   collection and never reused.
//! - Cross-entity references are weak: deleting the target never cascades,
//!   and readers must tolerate dangling ids.

use uuid::Uuid;

pub mod catalog;
pub mod document;
pub mod dosimeter;
pub mod employee;
pub mod radiation;
pub mod training;
pub mod user;

/// Opaque record identifier.
///
/// Kept as a string rather than a `Uuid` so documents written by earlier
/// versions (numeric ids like `"1"`) keep loading unchanged.
pub type EntityId = String;

/// Generates a fresh random identifier for a new record.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}
