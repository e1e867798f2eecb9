use serde::{Deserialize, Serialize};

/// Operational snapshot of one salon as the data layer reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalonAttributes {
    pub is_verified: bool,
    pub license_status: LicenseStatus,
    pub rating_average: f64,
    pub total_bookings: u32,
    pub total_revenue: f64,
    pub employee_count: u32,
    pub max_staff: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    Valid,
    Expiring,
    Expired,
    Unknown,
}

impl LicenseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LicenseStatus::Valid => "valid",
            LicenseStatus::Expiring => "expiring",
            LicenseStatus::Expired => "expired",
            LicenseStatus::Unknown => "unknown",
        }
    }
}

/// Compliance verdict. `issues` preserves evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub score: u8,
    pub level: ComplianceLevel,
    pub issues: Vec<String>,
}

/// Polarity note: this level names the *risk*, not the score — `Low` means
/// low risk (good standing) and pairs with a high numeric score. Kept that
/// way deliberately; callers key off the inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    Low,
    Medium,
    High,
}

impl ComplianceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceLevel::Low => "low",
            ComplianceLevel::Medium => "medium",
            ComplianceLevel::High => "high",
        }
    }
}

/// License state derived from an expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDerivation {
    pub status: LicenseStatus,
    pub days_remaining: Option<i64>,
}
