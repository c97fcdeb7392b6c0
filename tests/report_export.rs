use chrono::NaiveDate;
use radsafe_core::service::report_service::{
    build_report, render_pages, ReportError, ReportQuery,
};
use radsafe_core::store::EntityStore;
use radsafe_core::RadiationRecord;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn store_with_readings(count: usize) -> EntityStore {
    let mut store = EntityStore::open_in_memory().unwrap();
    let records: Vec<RadiationRecord> = (0..count)
        .map(|i| {
            let mut record = RadiationRecord::new(
                "1",
                format!("2024-01-{:02}", (i % 28) + 1),
                0.5 + i as f64 * 0.1,
            );
            record.location = "Phòng X-quang".to_string();
            record.radiation_type = "Gamma".to_string();
            record
        })
        .collect();
    store.import(records).unwrap();
    store
}

#[test]
fn unknown_employee_is_rejected() {
    let store = EntityStore::open_in_memory().unwrap();
    let query = ReportQuery {
        employee_id: "no-such-employee".to_string(),
        ..ReportQuery::default()
    };
    assert!(matches!(
        build_report(&store, &query).unwrap_err(),
        ReportError::EmployeeNotFound(_)
    ));
}

#[test]
fn empty_result_is_an_error_not_an_empty_document() {
    let store = store_with_readings(3);
    let query = ReportQuery {
        employee_id: "1".to_string(),
        from: Some(date("2030-01-01")),
        to: None,
    };
    assert!(matches!(
        build_report(&store, &query).unwrap_err(),
        ReportError::NoReadingsInRange
    ));
}

#[test]
fn rows_are_filtered_by_range_and_numbered_from_one() {
    let store = store_with_readings(10);
    let query = ReportQuery {
        employee_id: "1".to_string(),
        from: Some(date("2024-01-03")),
        to: Some(date("2024-01-06")),
    };

    let report = build_report(&store, &query).unwrap();
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.rows[0].index, 1);
    assert_eq!(report.rows[0].date, "2024-01-03");
    assert_eq!(report.rows.last().unwrap().index, 4);

    assert_eq!(report.employee.code, "NV001");
    assert_eq!(report.department_name, "Phòng Kỹ thuật");
    assert_eq!(report.position_name, "Kỹ sư");
}

#[test]
fn pages_carry_title_header_and_final_signature_block() {
    let store = store_with_readings(45);
    let query = ReportQuery {
        employee_id: "1".to_string(),
        ..ReportQuery::default()
    };

    let report = build_report(&store, &query).unwrap();
    assert_eq!(report.rows.len(), 45);

    let pages = render_pages(&report);
    assert_eq!(pages.len(), 3, "20 rows per page");

    for (i, page) in pages.iter().enumerate() {
        assert!(page.contains("SỔ THEO DÕI CHỈ SỐ BỨC XẠ"));
        assert!(page.contains("Họ tên: Nguyễn Văn A"));
        assert!(page.contains("Mã nhân viên: NV001"));
        assert!(page.contains(&format!("Trang {}/3", i + 1)));
    }

    assert!(!pages[0].contains("Người lập báo cáo"));
    assert!(!pages[1].contains("Người lập báo cáo"));
    assert!(pages[2].contains("Người lập báo cáo"));
    assert!(pages[2].contains("Người phê duyệt"));

    // Unbounded query prints the catch-all label.
    assert!(pages[0].contains("Từ ngày: Tất cả"));
    assert!(pages[0].contains("Đến ngày: Tất cả"));
}
