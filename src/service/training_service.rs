//! Training-course participant and status use-cases.
//!
//! # Invariants
//! - Participant lists stay ordered by enrollment; enrolling twice is a
//!   no-op rather than a duplicate.
//! - Status transitions are unrestricted; any state may follow any other.

use crate::model::training::{CourseStatus, TrainingCourse};
use crate::store::{EntityStore, Record, StoreError, StoreResult};

/// Adds the employee to the course's participant list (idempotent).
pub fn enroll_participant(
    store: &mut EntityStore,
    course_id: &str,
    employee_id: &str,
) -> StoreResult<()> {
    let mut course = require(store, course_id)?;
    if course.participants.iter().any(|id| id == employee_id) {
        return Ok(());
    }
    course.participants.push(employee_id.to_string());
    store.update::<TrainingCourse>(course_id, course)
}

/// Removes the employee from the course's participant list (idempotent).
pub fn withdraw_participant(
    store: &mut EntityStore,
    course_id: &str,
    employee_id: &str,
) -> StoreResult<()> {
    let mut course = require(store, course_id)?;
    course.participants.retain(|id| id != employee_id);
    store.update::<TrainingCourse>(course_id, course)
}

/// Sets the course status.
pub fn set_status(
    store: &mut EntityStore,
    course_id: &str,
    status: CourseStatus,
) -> StoreResult<()> {
    let mut course = require(store, course_id)?;
    course.status = status;
    store.update::<TrainingCourse>(course_id, course)
}

fn require(store: &EntityStore, course_id: &str) -> StoreResult<TrainingCourse> {
    store
        .get::<TrainingCourse>(course_id)
        .ok_or_else(|| StoreError::NotFound {
            collection: TrainingCourse::COLLECTION,
            id: course_id.to_string(),
        })
}
