use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appointment row as the booking data layer returns it. Read-only input to
/// the predictor; nothing here is persisted or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: String,
    pub customer_id: String,
    pub start_time: Option<DateTime<Utc>>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Completed,
    Cancelled,
    NoShow,
    Confirmed,
    Pending,
}

impl AppointmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
        }
    }
}

/// Ordinal churn risk. `Unknown` is reserved for customers with no history
/// at all; the remaining levels ascend with the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Unknown => "unknown",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Fixed retention guidance attached to every assessment.
    pub const fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::Unknown => "No appointment history available",
            RiskLevel::Low => "Continue regular engagement",
            RiskLevel::Medium => "Send a reminder or check-in message",
            RiskLevel::High => "Enroll in a re-engagement campaign",
            RiskLevel::Critical => "Reach out immediately with a personalized offer",
        }
    }
}

/// Churn verdict for one customer. `factors` preserves evaluation order so
/// identical histories always render identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnAssessment {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub factors: Vec<String>,
    pub recommendation: String,
    /// Whole days since the most recent completed visit; `None` when no
    /// completed visit carries a timestamp.
    pub days_since_last_visit: Option<i64>,
    pub avg_days_between_visits: i64,
    pub total_visits: u32,
    pub cancellation_rate_pct: u32,
    pub no_show_rate_pct: u32,
}

impl ChurnAssessment {
    pub(crate) fn no_history() -> Self {
        Self {
            risk_level: RiskLevel::Unknown,
            risk_score: 0,
            factors: Vec::new(),
            recommendation: RiskLevel::Unknown.recommendation().to_string(),
            days_since_last_visit: None,
            avg_days_between_visits: 0,
            total_visits: 0,
            cancellation_rate_pct: 0,
            no_show_rate_pct: 0,
        }
    }
}
