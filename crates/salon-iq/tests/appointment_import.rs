//! End-to-end check that a booking CSV export flows through the importer
//! into a churn assessment without touching the filesystem or clock.

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use salon_iq::imports::AppointmentHistoryImporter;
use salon_iq::scoring::{ChurnRiskPredictor, RiskLevel};

const EXPORT: &str = "\
Appointment ID,Customer ID,Start Time,Status
a-01,c-7,2025-05-10T10:00:00Z,completed
a-02,c-7,2025-06-09T10:00:00Z,completed
a-03,c-7,2025-07-09T10:00:00Z,completed
a-04,c-7,2025-08-08T10:00:00Z,completed
a-05,c-7,2025-09-07T10:00:00Z,completed
a-06,c-7,2025-10-01T10:00:00Z,cancelled
a-07,c-7,,no-show
";

#[test]
fn exported_history_scores_like_hand_built_records() {
    let records =
        AppointmentHistoryImporter::from_reader(Cursor::new(EXPORT)).expect("import succeeds");
    assert_eq!(records.len(), 7);

    let now = Utc
        .with_ymd_and_hms(2026, 3, 26, 10, 0, 0)
        .single()
        .expect("valid reference instant");
    let assessment = ChurnRiskPredictor::default().predict(&records, now);

    // Five monthly visits ending 200 days before `now`: overdue, plus one
    // cancellation and one no-show against five completed visits.
    assert_eq!(assessment.total_visits, 5);
    assert_eq!(assessment.days_since_last_visit, Some(200));
    assert_eq!(assessment.avg_days_between_visits, 30);
    assert_eq!(assessment.cancellation_rate_pct, 20);
    assert_eq!(assessment.no_show_rate_pct, 20);
    assert!(assessment
        .factors
        .contains(&"Overdue for return visit".to_string()));
    assert_eq!(assessment.risk_level, RiskLevel::High);
}

#[test]
fn import_failures_surface_as_csv_errors() {
    // Row with a column count that cannot deserialize.
    let bad = "Appointment ID,Customer ID,Start Time,Status\nonly-one-field\n";
    let error = AppointmentHistoryImporter::from_reader(Cursor::new(bad))
        .expect_err("expected a csv error");
    assert!(error.to_string().contains("appointment"));
}
