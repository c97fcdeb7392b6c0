//! Radiation reading log entries.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// One measured dose reading for an employee at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiationRecord {
    pub id: EntityId,
    /// Weak reference to the measured employee; may dangle after roster edits.
    #[serde(default)]
    pub employee_id: EntityId,
    /// Measurement date, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Accumulated dose in millisievert.
    pub dosimeter_reading: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub radiation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RadiationRecord {
    pub fn new(employee_id: impl Into<EntityId>, date: impl Into<String>, reading: f64) -> Self {
        Self {
            id: new_entity_id(),
            employee_id: employee_id.into(),
            date: date.into(),
            dosimeter_reading: reading,
            location: String::new(),
            radiation_type: String::new(),
            notes: None,
        }
    }
}
