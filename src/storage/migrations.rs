//! Document migration registry and executor.
//!
//! # Responsibility
//! - Register shape migrations in strictly increasing order.
//! - Bring any legacy stored document up to the canonical schema before it
//!   is decoded into typed collections.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - The applied version is mirrored into the document's `schemaVersion`
//!   field.
//! - Two legacy shapes exist in the wild: a flat pre-versioned document with
//!   `employeeId`/`department`-style employee fields, and a components-only
//!   subset missing several collections. Both must load.

use super::{StorageError, StorageResult};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    apply: fn(&mut Value),
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        apply: canonicalize_legacy_fields,
    },
    Migration {
        version: 2,
        apply: normalize_vocabulary,
    },
];

/// Every collection key the canonical document carries.
const COLLECTIONS: &[&str] = &[
    "departments",
    "positions",
    "employees",
    "dosimeters",
    "trainingUnits",
    "dosimetryAgencies",
    "radiationSources",
    "equipmentTypes",
    "trainingCourses",
    "radiationRecords",
    "users",
];

/// Returns the newest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations in place.
///
/// Returns `Ok(true)` when the document changed version and needs to be
/// persisted again. A stored version newer than the registry is an error;
/// it must never be silently rewritten by an older binary.
pub fn apply_migrations(value: &mut Value) -> StorageResult<bool> {
    let current = document_version(value);
    let latest = latest_version();

    if current > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            stored: current,
            latest_supported: latest,
        });
    }

    if current == latest {
        return Ok(false);
    }

    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        (migration.apply)(value);
        set_document_version(value, migration.version);
    }

    Ok(true)
}

fn document_version(value: &Value) -> u32 {
    value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .map_or(0, |version| version as u32)
}

fn set_document_version(value: &mut Value, version: u32) {
    if let Some(map) = value.as_object_mut() {
        map.insert("schemaVersion".to_string(), json!(version));
    }
}

/// v1: fold the flat pre-versioned shape into canonical field names and make
/// sure every collection key is present.
fn canonicalize_legacy_fields(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };

    for key in COLLECTIONS {
        map.entry(key.to_string()).or_insert_with(|| json!([]));
    }

    if let Some(employees) = map.get_mut("employees").and_then(Value::as_array_mut) {
        for employee in employees.iter_mut().filter_map(Value::as_object_mut) {
            rename_field(employee, "employeeId", "code");
            rename_field(employee, "department", "departmentId");
            rename_field(employee, "position", "positionId");
            rename_field(employee, "startDate", "joinDate");
        }
    }

    if let Some(dosimeters) = map.get_mut("dosimeters").and_then(Value::as_array_mut) {
        for dosimeter in dosimeters.iter_mut().filter_map(Value::as_object_mut) {
            rename_field(dosimeter, "calibrationDate", "lastCalibrationDate");
        }
    }
}

/// v2: collapse the alternate dosimeter status vocabulary and guarantee a
/// usable users collection.
fn normalize_vocabulary(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };

    if let Some(dosimeters) = map.get_mut("dosimeters").and_then(Value::as_array_mut) {
        for dosimeter in dosimeters.iter_mut().filter_map(Value::as_object_mut) {
            if let Some(status) = dosimeter.get("status").and_then(Value::as_str) {
                // Assignment is expressed by `assignedTo`; the device itself
                // is serviceable either way.
                if status == "available" || status == "assigned" {
                    dosimeter.insert("status".to_string(), json!("active"));
                }
            }
            if dosimeter.get("assignedTo").and_then(Value::as_str) == Some("") {
                dosimeter.remove("assignedTo");
            }
        }
    }

    let needs_admin = map
        .get("users")
        .and_then(Value::as_array)
        .is_none_or(Vec::is_empty);
    if needs_admin {
        map.insert(
            "users".to_string(),
            json!([{
                "id": "1",
                "username": "admin",
                "password": "admin123",
                "fullName": "Quản trị viên",
                "email": "admin@radsafe.local",
                "role": "admin",
            }]),
        );
    }
}

fn rename_field(record: &mut serde_json::Map<String, Value>, from: &str, to: &str) {
    if record.contains_key(to) {
        return;
    }
    if let Some(value) = record.remove(from) {
        record.insert(to.to_string(), value);
    }
}
