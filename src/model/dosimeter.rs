//! Dosimeter device model.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// Operational state of a dosimeter device.
///
/// The legacy `available`/`assigned` vocabulary is folded into `Active` by
/// the storage migrations; assignment itself is expressed by `assigned_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DosimeterStatus {
    Active,
    Inactive,
    Maintenance,
}

/// Personal dosimeter assigned to at most one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosimeter {
    pub id: EntityId,
    pub serial_number: String,
    /// Weak reference to the wearing employee. Deleting the employee leaves
    /// this id dangling; display resolves it to "unassigned".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<EntityId>,
    #[serde(default)]
    pub last_calibration_date: String,
    #[serde(default)]
    pub next_calibration_date: String,
    pub status: DosimeterStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Dosimeter {
    /// Creates an unassigned, active dosimeter with a fresh identifier.
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            serial_number: serial_number.into(),
            assigned_to: None,
            last_calibration_date: String::new(),
            next_calibration_date: String::new(),
            status: DosimeterStatus::Active,
            notes: None,
        }
    }

    /// Whether a non-empty assignment reference is present.
    ///
    /// Legacy documents stored `""` for "nobody"; treat that the same as a
    /// missing field.
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.as_deref().is_some_and(|id| !id.is_empty())
    }
}
