//! Denormalized read views.
//!
//! # Responsibility
//! - Attach referenced display fields onto referencing entities at read
//!   time, by linear scan. Nothing here is stored.
//!
//! # Invariants
//! - Dangling references never fail; they resolve to `None` or to the
//!   unassigned label.

use crate::model::dosimeter::{Dosimeter, DosimeterStatus};
use crate::model::employee::{Department, Employee, Position};
use crate::store::EntityStore;

/// Display name used when a dosimeter's assignment is absent or dangling.
pub const UNASSIGNED_LABEL: &str = "unassigned";

/// Employee with its department/position resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

/// Dosimeter with the wearer's name resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DosimeterDetail {
    pub dosimeter: Dosimeter,
    pub assigned_to_name: String,
}

/// Dashboard headline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub employees: usize,
    pub dosimeters_total: usize,
    pub dosimeters_assigned: usize,
    pub dosimeters_active: usize,
    pub dosimeters_in_maintenance: usize,
}

impl EntityStore {
    /// Employees with department and position joined in.
    pub fn employees_detailed(&self) -> Vec<EmployeeDetail> {
        let doc = self.document();
        doc.employees
            .iter()
            .map(|employee| EmployeeDetail {
                department: doc
                    .departments
                    .iter()
                    .find(|d| d.id == employee.department_id)
                    .cloned(),
                position: doc
                    .positions
                    .iter()
                    .find(|p| p.id == employee.position_id)
                    .cloned(),
                employee: employee.clone(),
            })
            .collect()
    }

    /// Dosimeters with `assigned_to_name` computed from the employee roster.
    pub fn dosimeters_detailed(&self) -> Vec<DosimeterDetail> {
        let doc = self.document();
        doc.dosimeters
            .iter()
            .map(|dosimeter| {
                let assigned_to_name = dosimeter
                    .assigned_to
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .and_then(|id| doc.employees.iter().find(|e| e.id == id))
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| UNASSIGNED_LABEL.to_string());
                DosimeterDetail {
                    dosimeter: dosimeter.clone(),
                    assigned_to_name,
                }
            })
            .collect()
    }

    /// Headline counts for the dashboard.
    pub fn summary(&self) -> StoreSummary {
        let doc = self.document();
        StoreSummary {
            employees: doc.employees.len(),
            dosimeters_total: doc.dosimeters.len(),
            dosimeters_assigned: doc.dosimeters.iter().filter(|d| d.is_assigned()).count(),
            dosimeters_active: doc
                .dosimeters
                .iter()
                .filter(|d| d.status == DosimeterStatus::Active)
                .count(),
            dosimeters_in_maintenance: doc
                .dosimeters
                .iter()
                .filter(|d| d.status == DosimeterStatus::Maintenance)
                .count(),
        }
    }
}
