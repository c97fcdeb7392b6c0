//! Exposure-log report export ("Sổ theo dõi chỉ số bức xạ").
//!
//! # Responsibility
//! - Filter one employee's radiation readings by an optional date range.
//! - Render the result as a paginated plain-text document: title block,
//!   employee header fields, numbered tabular body, signature footer.
//!
//! # Invariants
//! - Rows keep the stored reading order and are numbered from 1 across
//!   pages.
//! - A query matching no readings is an error, not an empty document.

use crate::model::employee::Employee;
use crate::model::EntityId;
use crate::store::EntityStore;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter, Write as _};

/// Rows per rendered page, excluding header and footer lines.
const ROWS_PER_PAGE: usize = 20;

const REPORT_TITLE: &str = "SỔ THEO DÕI CHỈ SỐ BỨC XẠ";
const ALL_DATES_LABEL: &str = "Tất cả";

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug)]
pub enum ReportError {
    EmployeeNotFound(EntityId),
    NoReadingsInRange,
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::NoReadingsInRange => {
                write!(f, "no radiation readings in the selected period")
            }
        }
    }
}

impl Error for ReportError {}

/// Report selection: one employee, optional inclusive date bounds.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub employee_id: EntityId,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// One numbered body row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub index: usize,
    pub date: String,
    pub reading: f64,
    pub location: String,
    pub radiation_type: String,
    pub notes: String,
}

/// Assembled report, ready to render.
#[derive(Debug, Clone)]
pub struct ExposureReport {
    pub employee: Employee,
    pub department_name: String,
    pub position_name: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub rows: Vec<ReportRow>,
}

/// Collects and filters the report data.
pub fn build_report(store: &EntityStore, query: &ReportQuery) -> ReportResult<ExposureReport> {
    let doc = store.document();
    let employee = doc
        .employees
        .iter()
        .find(|e| e.id == query.employee_id)
        .cloned()
        .ok_or_else(|| ReportError::EmployeeNotFound(query.employee_id.clone()))?;

    let department_name = doc
        .departments
        .iter()
        .find(|d| d.id == employee.department_id)
        .map(|d| d.name.clone())
        .unwrap_or_default();
    let position_name = doc
        .positions
        .iter()
        .find(|p| p.id == employee.position_id)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    let rows: Vec<ReportRow> = doc
        .radiation_records
        .iter()
        .filter(|record| record.employee_id == employee.id)
        .filter(|record| in_range(&record.date, query.from, query.to))
        .enumerate()
        .map(|(i, record)| ReportRow {
            index: i + 1,
            date: record.date.clone(),
            reading: record.dosimeter_reading,
            location: record.location.clone(),
            radiation_type: record.radiation_type.clone(),
            notes: record.notes.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    if rows.is_empty() {
        return Err(ReportError::NoReadingsInRange);
    }

    Ok(ExposureReport {
        employee,
        department_name,
        position_name,
        from: query.from,
        to: query.to,
        rows,
    })
}

/// Renders the report as printable pages.
///
/// Every page repeats the title block and employee header; the signature
/// footer appears on the final page.
pub fn render_pages(report: &ExposureReport) -> Vec<String> {
    let chunks: Vec<&[ReportRow]> = report.rows.chunks(ROWS_PER_PAGE).collect();
    let total = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(page_index, rows)| {
            let mut page = String::new();
            let _ = writeln!(page, "{REPORT_TITLE}");
            let _ = writeln!(page);
            let _ = writeln!(page, "Họ tên: {}", report.employee.name);
            let _ = writeln!(page, "Mã nhân viên: {}", report.employee.code);
            let _ = writeln!(page, "Phòng ban: {}", report.department_name);
            let _ = writeln!(page, "Chức vụ: {}", report.position_name);
            let _ = writeln!(page, "Từ ngày: {}", date_label(report.from));
            let _ = writeln!(page, "Đến ngày: {}", date_label(report.to));
            let _ = writeln!(page);
            let _ = writeln!(
                page,
                "STT | Ngày đo | Chỉ số (mSv) | Vị trí đo | Loại bức xạ | Ghi chú"
            );
            for row in *rows {
                let _ = writeln!(
                    page,
                    "{} | {} | {} | {} | {} | {}",
                    row.index, row.date, row.reading, row.location, row.radiation_type, row.notes
                );
            }
            let _ = writeln!(page);
            if page_index + 1 == total {
                let _ = writeln!(page, "Người lập báo cáo\t\t\tNgười phê duyệt");
                let _ = writeln!(page);
            }
            let _ = writeln!(page, "Trang {}/{}", page_index + 1, total);
            page
        })
        .collect()
}

fn date_label(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| ALL_DATES_LABEL.to_string(), |d| d.to_string())
}

fn in_range(date: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    // A bounded query drops rows whose stored date cannot be parsed.
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return false;
    };
    from.is_none_or(|start| parsed >= start) && to.is_none_or(|end| parsed <= end)
}
