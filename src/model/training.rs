//! Training-course model.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// Course lifecycle state.
///
/// Transitions are not validated; a course may move between any two states,
/// including skipping `InProgress` entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    Scheduled,
    InProgress,
    Completed,
}

/// Scheduled radiation-safety training course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCourse {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub instructor: String,
    /// Ordered set of participant employee ids (weak references).
    #[serde(default)]
    pub participants: Vec<EntityId>,
    pub status: CourseStatus,
}

impl TrainingCourse {
    /// Creates a scheduled course with no participants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            instructor: String::new(),
            participants: Vec::new(),
            status: CourseStatus::Scheduled,
        }
    }
}
