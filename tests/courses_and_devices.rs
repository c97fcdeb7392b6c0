use chrono::NaiveDate;
use radsafe_core::service::{dosimeter_service, training_service};
use radsafe_core::store::{EntityStore, StoreError};
use radsafe_core::{CourseStatus, Dosimeter, TrainingCourse};

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

#[test]
fn enrollment_is_ordered_and_idempotent() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let course = TrainingCourse::new("An toàn bức xạ cơ bản");
    let course_id = course.id.clone();
    store.add(course).unwrap();

    training_service::enroll_participant(&mut store, &course_id, "emp-b").unwrap();
    training_service::enroll_participant(&mut store, &course_id, "emp-a").unwrap();
    training_service::enroll_participant(&mut store, &course_id, "emp-b").unwrap();

    let course = store.get::<TrainingCourse>(&course_id).unwrap();
    assert_eq!(course.participants, vec!["emp-b", "emp-a"]);

    training_service::withdraw_participant(&mut store, &course_id, "emp-b").unwrap();
    let course = store.get::<TrainingCourse>(&course_id).unwrap();
    assert_eq!(course.participants, vec!["emp-a"]);
}

#[test]
fn course_status_may_skip_states() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let course = TrainingCourse::new("Tập huấn nâng cao");
    let course_id = course.id.clone();
    assert_eq!(course.status, CourseStatus::Scheduled);
    store.add(course).unwrap();

    // Straight from scheduled to completed: transitions are unrestricted.
    training_service::set_status(&mut store, &course_id, CourseStatus::Completed).unwrap();
    let course = store.get::<TrainingCourse>(&course_id).unwrap();
    assert_eq!(course.status, CourseStatus::Completed);
}

#[test]
fn course_operations_on_missing_course_fail_with_not_found() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let err = training_service::enroll_participant(&mut store, "missing", "emp-a").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { collection: "trainingCourses", .. }
    ));
}

#[test]
fn assign_and_release_update_the_reference_only() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let dosimeter = Dosimeter::new("DOS-300");
    let dosimeter_id = dosimeter.id.clone();
    store.add(dosimeter).unwrap();

    dosimeter_service::assign(&mut store, &dosimeter_id, "emp-x").unwrap();
    let dosimeter = store.get::<Dosimeter>(&dosimeter_id).unwrap();
    assert_eq!(dosimeter.assigned_to.as_deref(), Some("emp-x"));

    dosimeter_service::release(&mut store, &dosimeter_id).unwrap();
    let dosimeter = store.get::<Dosimeter>(&dosimeter_id).unwrap();
    assert!(dosimeter.assigned_to.is_none());
}

#[test]
fn calibration_due_respects_the_window_and_skips_bad_dates() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let mut due_soon = Dosimeter::new("DOS-400");
    due_soon.next_calibration_date = "2024-09-01".to_string();
    let mut due_later = Dosimeter::new("DOS-401");
    due_later.next_calibration_date = "2025-01-01".to_string();
    let mut no_date = Dosimeter::new("DOS-402");
    no_date.next_calibration_date = String::new();
    store.add(due_soon).unwrap();
    store.add(due_later).unwrap();
    store.add(no_date).unwrap();

    let due = dosimeter_service::calibration_due(&store, date("2024-08-20"), 30);
    let serials: Vec<String> = due.into_iter().map(|d| d.serial_number).collect();
    // Seed dosimeter's next calibration (2024-08-01) is already overdue.
    assert_eq!(serials, vec!["DOS-001", "DOS-400"]);
}
