use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::scoring::churn::{AppointmentRecord, AppointmentStatus};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AppointmentRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<AppointmentRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AppointmentRow {
    #[serde(rename = "Appointment ID")]
    id: String,
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Start Time", default, deserialize_with = "empty_string_as_none")]
    start_time: Option<String>,
    #[serde(rename = "Status", default)]
    status: String,
}

impl AppointmentRow {
    fn into_record(self) -> AppointmentRecord {
        let start_time = self.start_time.as_deref().and_then(parse_instant);
        let status = parse_status(&self.status);

        AppointmentRecord {
            id: self.id,
            customer_id: self.customer_id,
            start_time,
            status,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_status(value: &str) -> AppointmentStatus {
    match value.trim().to_ascii_lowercase().as_str() {
        "completed" | "complete" => AppointmentStatus::Completed,
        "cancelled" | "canceled" => AppointmentStatus::Cancelled,
        "no_show" | "no-show" | "noshow" => AppointmentStatus::NoShow,
        "confirmed" => AppointmentStatus::Confirmed,
        _ => AppointmentStatus::Pending,
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}
