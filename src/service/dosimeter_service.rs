//! Dosimeter assignment and calibration use-cases.

use crate::model::dosimeter::Dosimeter;
use crate::store::{EntityStore, Record, StoreError, StoreResult};
use chrono::NaiveDate;

/// Assigns the dosimeter to an employee by full-record replacement.
///
/// The employee id is not validated; a later roster deletion leaves the
/// reference dangling, which the read views resolve to "unassigned".
pub fn assign(
    store: &mut EntityStore,
    dosimeter_id: &str,
    employee_id: &str,
) -> StoreResult<()> {
    let mut dosimeter = require(store, dosimeter_id)?;
    dosimeter.assigned_to = Some(employee_id.to_string());
    store.update::<Dosimeter>(dosimeter_id, dosimeter)
}

/// Clears the dosimeter's assignment.
pub fn release(store: &mut EntityStore, dosimeter_id: &str) -> StoreResult<()> {
    let mut dosimeter = require(store, dosimeter_id)?;
    dosimeter.assigned_to = None;
    store.update::<Dosimeter>(dosimeter_id, dosimeter)
}

/// Dosimeters whose next calibration date falls on or before
/// `as_of + window_days`. Unparseable or empty dates are skipped.
pub fn calibration_due(
    store: &EntityStore,
    as_of: NaiveDate,
    window_days: i64,
) -> Vec<Dosimeter> {
    let horizon = as_of + chrono::Duration::days(window_days);
    store
        .list::<Dosimeter>()
        .into_iter()
        .filter(|dosimeter| {
            NaiveDate::parse_from_str(&dosimeter.next_calibration_date, "%Y-%m-%d")
                .map(|due| due <= horizon)
                .unwrap_or(false)
        })
        .collect()
}

fn require(store: &EntityStore, dosimeter_id: &str) -> StoreResult<Dosimeter> {
    store
        .get::<Dosimeter>(dosimeter_id)
        .ok_or_else(|| StoreError::NotFound {
            collection: Dosimeter::COLLECTION,
            id: dosimeter_id.to_string(),
        })
}
