//! Collection bindings for the generic store operations.
//!
//! Every collection shares identical CRUD semantics, so instead of one
//! hand-written access layer per entity (the shape of the legacy code) each
//! type declares its document slot once and the store stays generic.

use crate::model::catalog::{DosimetryAgency, EquipmentType, RadiationSource, TrainingUnit};
use crate::model::document::Document;
use crate::model::dosimeter::Dosimeter;
use crate::model::employee::{Department, Employee, Position};
use crate::model::radiation::RadiationRecord;
use crate::model::training::TrainingCourse;
use crate::model::user::User;

/// Binds an entity type to its named collection in the document.
pub trait Record: Clone {
    /// Collection name as it appears in the persisted document.
    const COLLECTION: &'static str;
    fn id(&self) -> &str;
    fn slot(doc: &Document) -> &Vec<Self>;
    fn slot_mut(doc: &mut Document) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($type:ty, $collection:literal, $field:ident) => {
        impl Record for $type {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &str {
                &self.id
            }

            fn slot(doc: &Document) -> &Vec<Self> {
                &doc.$field
            }

            fn slot_mut(doc: &mut Document) -> &mut Vec<Self> {
                &mut doc.$field
            }
        }
    };
}

impl_record!(Department, "departments", departments);
impl_record!(Position, "positions", positions);
impl_record!(Employee, "employees", employees);
impl_record!(Dosimeter, "dosimeters", dosimeters);
impl_record!(TrainingUnit, "trainingUnits", training_units);
impl_record!(DosimetryAgency, "dosimetryAgencies", dosimetry_agencies);
impl_record!(RadiationSource, "radiationSources", radiation_sources);
impl_record!(EquipmentType, "equipmentTypes", equipment_types);
impl_record!(TrainingCourse, "trainingCourses", training_courses);
impl_record!(RadiationRecord, "radiationRecords", radiation_records);
impl_record!(User, "users", users);
