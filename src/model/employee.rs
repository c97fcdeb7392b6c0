//! Employee roster model and its reference tables.
//!
//! # Invariants
//! - `department_id` / `position_id` are weak references; they may point at
//!   a removed record and are only resolved to display fields at read time.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// Organizational unit an employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Job title reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Monitored worker record.
///
/// Date fields are ISO `YYYY-MM-DD` strings as written by the forms and the
/// spreadsheet import; they are parsed only where comparison is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    /// Human-readable staff code ("Mã NV"), e.g. `NV001`.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub department_id: EntityId,
    #[serde(default)]
    pub position_id: EntityId,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub contact_info: String,
}

impl Department {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl Position {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl Employee {
    /// Creates an employee with a freshly generated identifier.
    ///
    /// Reference and date fields start empty; form submission or import
    /// fills them in afterwards.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            code: code.into(),
            name: name.into(),
            department_id: EntityId::new(),
            position_id: EntityId::new(),
            date_of_birth: String::new(),
            join_date: String::new(),
            contact_info: String::new(),
        }
    }
}
