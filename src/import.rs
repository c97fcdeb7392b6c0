//! Spreadsheet (CSV) ingestion and egress.
//!
//! # Responsibility
//! - Map single-sheet tabular files to entities via fixed Vietnamese column
//!   headers. Header text is matched exactly; column order is not
//!   significant.
//! - Assign a freshly generated identifier to every imported row.
//!
//! # Invariants
//! - Import performs no duplicate or referential validation; that matches
//!   the form-level contract of the store.
//! - Unknown columns are ignored; missing optional columns yield empty
//!   fields.

use crate::model::employee::Employee;
use crate::model::radiation::RadiationRecord;
use crate::store::{EntityStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HEADER_EMPLOYEE_NAME: &str = "Họ tên";
pub const HEADER_EMPLOYEE_CODE: &str = "Mã NV";
pub const HEADER_DEPARTMENT: &str = "Phòng ban";
pub const HEADER_POSITION: &str = "Chức vụ";
pub const HEADER_DATE_OF_BIRTH: &str = "Ngày sinh";
pub const HEADER_JOIN_DATE: &str = "Ngày vào làm";
pub const HEADER_CONTACT: &str = "Liên hệ";

pub const HEADER_READING_DATE: &str = "Ngày đo";
pub const HEADER_READING_VALUE: &str = "Chỉ số (mSv)";
pub const HEADER_READING_LOCATION: &str = "Vị trí đo";
pub const HEADER_READING_TYPE: &str = "Loại bức xạ";
pub const HEADER_READING_NOTES: &str = "Ghi chú";

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Debug)]
pub enum ImportError {
    /// A required column header is absent from the first row.
    MissingHeader(&'static str),
    /// A numeric cell could not be parsed. `line` is 1-based and counts the
    /// header row.
    InvalidNumber { line: usize, value: String },
    Store(StoreError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader(header) => write!(f, "missing required column `{header}`"),
            Self::InvalidNumber { line, value } => {
                write!(f, "line {line}: `{value}` is not a number")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ImportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Bulk-appends employees from CSV text. Requires the "Họ tên" and "Mã NV"
/// columns; every other column is optional. Returns the number of rows
/// ingested.
pub fn import_employees(store: &mut EntityStore, csv: &str) -> ImportResult<usize> {
    let table = parse_table(csv);
    let Some((headers, rows)) = table.split_first() else {
        return Ok(0);
    };

    let name_col = require_column(headers, HEADER_EMPLOYEE_NAME)?;
    let code_col = require_column(headers, HEADER_EMPLOYEE_CODE)?;
    let department_col = find_column(headers, HEADER_DEPARTMENT);
    let position_col = find_column(headers, HEADER_POSITION);
    let dob_col = find_column(headers, HEADER_DATE_OF_BIRTH);
    let join_col = find_column(headers, HEADER_JOIN_DATE);
    let contact_col = find_column(headers, HEADER_CONTACT);

    let employees: Vec<Employee> = rows
        .iter()
        .map(|row| {
            let mut employee = Employee::new(cell(row, Some(code_col)), cell(row, Some(name_col)));
            employee.department_id = cell(row, department_col);
            employee.position_id = cell(row, position_col);
            employee.date_of_birth = cell(row, dob_col);
            employee.join_date = cell(row, join_col);
            employee.contact_info = cell(row, contact_col);
            employee
        })
        .collect();

    let count = store.import(employees)?;
    info!("event=import_employees module=import status=ok count={count}");
    Ok(count)
}

/// Bulk-appends radiation readings from CSV text. Employees are resolved by
/// staff code; an unknown code leaves the reference empty (dangling), as the
/// store never validates references.
pub fn import_radiation_records(store: &mut EntityStore, csv: &str) -> ImportResult<usize> {
    let table = parse_table(csv);
    let Some((headers, rows)) = table.split_first() else {
        return Ok(0);
    };

    let code_col = require_column(headers, HEADER_EMPLOYEE_CODE)?;
    let reading_col = require_column(headers, HEADER_READING_VALUE)?;
    let date_col = find_column(headers, HEADER_READING_DATE);
    let location_col = find_column(headers, HEADER_READING_LOCATION);
    let type_col = find_column(headers, HEADER_READING_TYPE);
    let notes_col = find_column(headers, HEADER_READING_NOTES);

    let employees = store.list::<Employee>();
    let mut records = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let raw = cell(row, Some(reading_col));
        let reading: f64 = raw.parse().map_err(|_| ImportError::InvalidNumber {
            line: row_index + 2,
            value: raw.clone(),
        })?;

        let code = cell(row, Some(code_col));
        let employee_id = employees
            .iter()
            .find(|employee| employee.code == code)
            .map(|employee| employee.id.clone())
            .unwrap_or_default();

        let mut record = RadiationRecord::new(employee_id, cell(row, date_col), reading);
        record.location = cell(row, location_col);
        record.radiation_type = cell(row, type_col);
        let notes = cell(row, notes_col);
        record.notes = (!notes.is_empty()).then_some(notes);
        records.push(record);
    }

    let count = store.import(records)?;
    info!("event=import_readings module=import status=ok count={count}");
    Ok(count)
}

/// Writes the employee roster back out with the same headers the import
/// reads, with department and position resolved to display names.
pub fn export_employees(store: &EntityStore) -> String {
    let mut out = String::new();
    out.push_str(&encode_row(&[
        HEADER_EMPLOYEE_CODE,
        HEADER_EMPLOYEE_NAME,
        HEADER_DEPARTMENT,
        HEADER_POSITION,
        HEADER_DATE_OF_BIRTH,
        HEADER_JOIN_DATE,
        HEADER_CONTACT,
    ]));

    for detail in store.employees_detailed() {
        let department = detail.department.map(|d| d.name).unwrap_or_default();
        let position = detail.position.map(|p| p.name).unwrap_or_default();
        out.push_str(&encode_row(&[
            &detail.employee.code,
            &detail.employee.name,
            &department,
            &position,
            &detail.employee.date_of_birth,
            &detail.employee.join_date,
            &detail.employee.contact_info,
        ]));
    }
    out
}

fn require_column(headers: &[String], name: &'static str) -> ImportResult<usize> {
    find_column(headers, name).ok_or(ImportError::MissingHeader(name))
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn cell(row: &[String], column: Option<usize>) -> String {
    column
        .and_then(|index| row.get(index))
        .cloned()
        .unwrap_or_default()
}

/// Minimal RFC 4180 reader: quoted fields, doubled-quote escapes, CRLF or
/// LF row separators. Blank lines are dropped.
fn parse_table(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                other => field.push(other),
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                if row.len() > 1 || !row[0].is_empty() {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            other => field.push(other),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        if row.len() > 1 || !row[0].is_empty() {
            rows.push(row);
        }
    }
    rows
}

fn encode_row(fields: &[&str]) -> String {
    let encoded: Vec<String> = fields.iter().map(|field| encode_field(field)).collect();
    let mut line = encoded.join(",");
    line.push('\n');
    line
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
