//! Flat reference tables with no outgoing relations.
//!
//! These are pure lookup catalogs: training providers, dosimetry agencies,
//! radiation sources and equipment types. Fields the two legacy variants
//! disagreed on are defaulted or optional so either stored shape loads.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// External organization delivering radiation-safety training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingUnit {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// External organization calibrating and reading dosimeters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosimetryAgency {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Registered radioactive source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiationSource {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    /// Radiation kind, e.g. "Gamma". Serialized as `type`.
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Measuring-equipment category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentType {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TrainingUnit {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            address: String::new(),
            contact: String::new(),
            description: None,
        }
    }
}

impl DosimetryAgency {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            address: String::new(),
            contact: String::new(),
            license_number: String::new(),
            description: None,
        }
    }
}

impl RadiationSource {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            source_type: String::new(),
            activity: String::new(),
            manufacturer: String::new(),
            description: None,
        }
    }
}

impl EquipmentType {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            description: None,
        }
    }
}
