use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::scoring::churn::{
    AppointmentRecord, AppointmentStatus, ChurnRiskPredictor, ChurnScoringConfig,
};

pub(super) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

pub(super) fn predictor() -> ChurnRiskPredictor {
    ChurnRiskPredictor::new(ChurnScoringConfig::default()).expect("default config is valid")
}

pub(super) fn appointment(
    id: &str,
    status: AppointmentStatus,
    days_ago: Option<i64>,
) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        customer_id: "cust-100".to_string(),
        start_time: days_ago.map(|days| reference_now() - Duration::days(days)),
        status,
    }
}

/// `count` completed visits, `gap_days` apart, the newest `last_days_ago` back.
pub(super) fn completed_cadence(
    count: usize,
    gap_days: i64,
    last_days_ago: i64,
) -> Vec<AppointmentRecord> {
    (0..count)
        .map(|index| {
            appointment(
                &format!("appt-{index}"),
                AppointmentStatus::Completed,
                Some(last_days_ago + gap_days * index as i64),
            )
        })
        .collect()
}

pub(super) fn cancellations(count: usize) -> Vec<AppointmentRecord> {
    (0..count)
        .map(|index| {
            appointment(
                &format!("cancel-{index}"),
                AppointmentStatus::Cancelled,
                Some(5 + index as i64),
            )
        })
        .collect()
}
