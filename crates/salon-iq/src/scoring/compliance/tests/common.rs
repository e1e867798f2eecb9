use chrono::NaiveDate;

use crate::scoring::compliance::{
    ComplianceConfig, ComplianceHealthScorer, HealthWeights, LicenseStatus, SalonAttributes,
};

pub(super) fn scorer() -> ComplianceHealthScorer {
    ComplianceHealthScorer::new(ComplianceConfig::default(), HealthWeights::default())
        .expect("default config is valid")
}

pub(super) fn reference_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid reference date")
}

/// A verified, licensed, well-reviewed salon trading at steady volume.
pub(super) fn established_salon() -> SalonAttributes {
    SalonAttributes {
        is_verified: true,
        license_status: LicenseStatus::Valid,
        rating_average: 4.8,
        total_bookings: 50,
        total_revenue: 80_000.0,
        employee_count: 5,
        max_staff: 10,
    }
}
