use radsafe_core::service::dosimeter_service;
use radsafe_core::store::EntityStore;
use radsafe_core::{Dosimeter, DosimeterStatus, Employee, UNASSIGNED_LABEL};

#[test]
fn employees_detailed_attaches_department_and_position() {
    let store = EntityStore::open_in_memory().unwrap();

    let details = store.employees_detailed();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].employee.code, "NV001");
    assert_eq!(details[0].department.as_ref().unwrap().name, "Phòng Kỹ thuật");
    assert_eq!(details[0].position.as_ref().unwrap().name, "Kỹ sư");
}

#[test]
fn dangling_department_resolves_to_none() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let mut employee = store.get::<Employee>("1").unwrap();
    employee.department_id = "no-such-department".to_string();
    store.update::<Employee>("1", employee).unwrap();

    let details = store.employees_detailed();
    assert!(details[0].department.is_none());
    assert!(details[0].position.is_some());
}

#[test]
fn assignment_resolves_to_employee_name_then_dangles_after_delete() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let employee = Employee::new("NV042", "Trần Văn E");
    let employee_id = employee.id.clone();
    let employee_name = employee.name.clone();
    store.add(employee).unwrap();

    let dosimeter = Dosimeter::new("DOS-042");
    let dosimeter_id = dosimeter.id.clone();
    store.add(dosimeter).unwrap();

    dosimeter_service::assign(&mut store, &dosimeter_id, &employee_id).unwrap();

    let view = store
        .dosimeters_detailed()
        .into_iter()
        .find(|d| d.dosimeter.id == dosimeter_id)
        .unwrap();
    assert_eq!(view.assigned_to_name, employee_name);

    // Deleting the employee never cascades; the reference is left dangling
    // and only the display name degrades.
    store.remove::<Employee>(&employee_id).unwrap();

    let view = store
        .dosimeters_detailed()
        .into_iter()
        .find(|d| d.dosimeter.id == dosimeter_id)
        .unwrap();
    assert_eq!(view.dosimeter.assigned_to.as_deref(), Some(employee_id.as_str()));
    assert_eq!(view.assigned_to_name, UNASSIGNED_LABEL);
}

#[test]
fn unassigned_and_empty_assignments_use_the_label() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let mut never_assigned = Dosimeter::new("DOS-100");
    never_assigned.assigned_to = None;
    let mut empty_assignment = Dosimeter::new("DOS-101");
    empty_assignment.assigned_to = Some(String::new());
    store.add(never_assigned).unwrap();
    store.add(empty_assignment).unwrap();

    let names: Vec<String> = store
        .dosimeters_detailed()
        .into_iter()
        .filter(|d| d.dosimeter.serial_number.starts_with("DOS-10"))
        .map(|d| d.assigned_to_name)
        .collect();
    assert_eq!(names, vec![UNASSIGNED_LABEL.to_string(), UNASSIGNED_LABEL.to_string()]);
}

#[test]
fn summary_counts_follow_the_collections() {
    let mut store = EntityStore::open_in_memory().unwrap();

    let mut in_maintenance = Dosimeter::new("DOS-200");
    in_maintenance.status = DosimeterStatus::Maintenance;
    store.add(in_maintenance).unwrap();

    let summary = store.summary();
    assert_eq!(summary.employees, 1);
    assert_eq!(summary.dosimeters_total, 2);
    // Seed dosimeter is assigned to the seed employee.
    assert_eq!(summary.dosimeters_assigned, 1);
    assert_eq!(summary.dosimeters_active, 1);
    assert_eq!(summary.dosimeters_in_maintenance, 1);
}
