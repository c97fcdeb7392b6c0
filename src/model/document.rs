//! The single persisted document.
//!
//! # Responsibility
//! - Hold every named collection in one mapping, mirroring the stored JSON.
//! - Provide the hard-coded seed used when no (or unreadable) stored text
//!   exists.
//!
//! # Invariants
//! - `schema_version` equals [`SCHEMA_VERSION`] after load; older documents
//!   pass through the storage migrations first.

use crate::model::catalog::{DosimetryAgency, EquipmentType, RadiationSource, TrainingUnit};
use crate::model::dosimeter::{Dosimeter, DosimeterStatus};
use crate::model::employee::{Department, Employee, Position};
use crate::model::radiation::RadiationRecord;
use crate::model::training::TrainingCourse;
use crate::model::user::User;
use serde::{Deserialize, Serialize};

/// Version written into every persisted document. Must match the newest
/// entry in the storage migration registry.
pub const SCHEMA_VERSION: u32 = 2;

/// Complete in-memory document: one ordered sequence per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub dosimeters: Vec<Dosimeter>,
    #[serde(default)]
    pub training_units: Vec<TrainingUnit>,
    #[serde(default)]
    pub dosimetry_agencies: Vec<DosimetryAgency>,
    #[serde(default)]
    pub radiation_sources: Vec<RadiationSource>,
    #[serde(default)]
    pub equipment_types: Vec<EquipmentType>,
    #[serde(default)]
    pub training_courses: Vec<TrainingCourse>,
    #[serde(default)]
    pub radiation_records: Vec<RadiationRecord>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Document {
    /// Builds the default document written on first start or when stored
    /// text cannot be parsed.
    pub fn seed() -> Self {
        let department = Department {
            id: "1".to_string(),
            code: "PKT".to_string(),
            name: "Phòng Kỹ thuật".to_string(),
            description: Some("Phòng Kỹ thuật và Công nghệ".to_string()),
        };
        let position = Position {
            id: "1".to_string(),
            code: "KS".to_string(),
            name: "Kỹ sư".to_string(),
            description: Some("Kỹ sư vận hành và bảo trì".to_string()),
        };
        let employee = Employee {
            id: "1".to_string(),
            code: "NV001".to_string(),
            name: "Nguyễn Văn A".to_string(),
            department_id: department.id.clone(),
            position_id: position.id.clone(),
            date_of_birth: "1990-01-15".to_string(),
            join_date: "2020-03-01".to_string(),
            contact_info: "0123456789".to_string(),
        };
        let dosimeter = Dosimeter {
            id: "1".to_string(),
            serial_number: "DOS-001".to_string(),
            assigned_to: Some(employee.id.clone()),
            last_calibration_date: "2024-02-01".to_string(),
            next_calibration_date: "2024-08-01".to_string(),
            status: DosimeterStatus::Active,
            notes: None,
        };

        Self {
            schema_version: SCHEMA_VERSION,
            departments: vec![department],
            positions: vec![position],
            employees: vec![employee],
            dosimeters: vec![dosimeter],
            training_units: vec![TrainingUnit {
                id: "1".to_string(),
                code: "VATLY01".to_string(),
                name: "Viện Đào tạo An toàn Bức xạ".to_string(),
                address: "Số 1 Đường ABC, Hà Nội".to_string(),
                contact: "024.1234.5678".to_string(),
                description: None,
            }],
            dosimetry_agencies: vec![DosimetryAgency {
                id: "1".to_string(),
                code: "VINATOMX".to_string(),
                name: "Viện Năng lượng Nguyên tử Việt Nam".to_string(),
                address: "Số 2 Đường XYZ, Hà Nội".to_string(),
                contact: "024.8765.4321".to_string(),
                license_number: "LICENSE-001".to_string(),
                description: None,
            }],
            radiation_sources: vec![RadiationSource {
                id: "1".to_string(),
                code: "CO60-001".to_string(),
                name: "Cobalt-60".to_string(),
                source_type: "Gamma".to_string(),
                activity: "100 Ci".to_string(),
                manufacturer: "Manufacturer A".to_string(),
                description: None,
            }],
            equipment_types: vec![EquipmentType {
                id: "1".to_string(),
                code: "GM-COUNTER".to_string(),
                name: "Máy đo bức xạ Geiger-Muller".to_string(),
                description: Some("Thiết bị đo phóng xạ beta và gamma".to_string()),
            }],
            training_courses: Vec::new(),
            radiation_records: Vec::new(),
            users: vec![User::default_admin()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, SCHEMA_VERSION};

    #[test]
    fn seed_carries_current_schema_version_and_admin() {
        let doc = Document::seed();
        assert_eq!(doc.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.users[0].username, "admin");
    }

    #[test]
    fn seed_serializes_with_document_field_names() {
        let text = serde_json::to_string(&Document::seed()).unwrap();
        assert!(text.contains("\"schemaVersion\""));
        assert!(text.contains("\"trainingUnits\""));
        assert!(text.contains("\"departmentId\""));
    }
}
