use chrono::NaiveDate;

use super::config::{ComplianceConfig, HealthWeights};
use super::domain::{LicenseDerivation, LicenseStatus, SalonAttributes};
use crate::scoring::bands::clamp_score;

pub(crate) fn compliance_findings(
    attributes: &SalonAttributes,
    config: &ComplianceConfig,
) -> (f64, Vec<String>) {
    let mut score = config.base;
    let mut issues = Vec::new();

    if !attributes.is_verified {
        score -= config.unverified_penalty;
        issues.push("Verification pending".to_string());
    }

    match attributes.license_status {
        LicenseStatus::Expired => {
            score -= config.expired_license_penalty;
            issues.push("License expired".to_string());
        }
        LicenseStatus::Expiring => {
            score -= config.expiring_license_penalty;
            issues.push("License expiring soon".to_string());
        }
        LicenseStatus::Unknown => {
            score -= config.unknown_license_penalty;
            issues.push("License status unknown".to_string());
        }
        LicenseStatus::Valid => {}
    }

    if attributes.max_staff > 0 && attributes.employee_count > attributes.max_staff {
        score -= config.overstaffed_penalty;
        issues.push("Staff count exceeds licensed capacity".to_string());
    }

    if attributes.rating_average < config.low_rating_cutoff {
        score -= config.low_rating_penalty;
        issues.push("Low customer rating".to_string());
    } else if attributes.rating_average > config.strong_rating_cutoff {
        score += config.strong_rating_bonus;
    }

    if attributes.total_bookings < config.sparse_booking_cutoff {
        score -= config.sparse_booking_penalty;
        issues.push("Limited booking history".to_string());
    }

    (score, issues)
}

pub(crate) fn health_composite(attributes: &SalonAttributes, weights: &HealthWeights) -> f64 {
    let rating = clamp_score(attributes.rating_average / weights.rating_scale, 0.0, 1.0);
    let bookings = clamp_score(
        attributes.total_bookings as f64 / weights.booking_saturation,
        0.0,
        1.0,
    );
    let revenue = clamp_score(
        attributes.total_revenue / weights.revenue_saturation,
        0.0,
        1.0,
    );

    // Capacity utilization against licensed headcount; a salon with no cap
    // on record is measured against its own staff so it reads as full.
    let staff_denominator = if attributes.max_staff > 0 {
        attributes.max_staff
    } else if attributes.employee_count > 0 {
        attributes.employee_count
    } else {
        1
    };
    let staffing = clamp_score(
        attributes.employee_count as f64 / staff_denominator as f64,
        0.0,
        1.0,
    );

    rating * weights.rating_weight
        + bookings * weights.booking_weight
        + revenue * weights.revenue_weight
        + staffing * weights.staffing_weight
}

/// Classify a license purely by its expiry date.
pub fn derive_license_status(
    expires_at: Option<NaiveDate>,
    today: NaiveDate,
    expiring_window_days: i64,
) -> LicenseDerivation {
    let Some(expires_at) = expires_at else {
        return LicenseDerivation {
            status: LicenseStatus::Unknown,
            days_remaining: None,
        };
    };

    let days_remaining = (expires_at - today).num_days();
    let status = if days_remaining < 0 {
        LicenseStatus::Expired
    } else if days_remaining <= expiring_window_days {
        LicenseStatus::Expiring
    } else {
        LicenseStatus::Valid
    };

    LicenseDerivation {
        status,
        days_remaining: Some(days_remaining),
    }
}

/// An explicit verification flag always wins; otherwise verification is
/// inferred only for salons that are taking bookings and show any trading
/// activity.
pub fn derive_verification_status(
    explicit: Option<bool>,
    accepting_bookings: bool,
    total_revenue: f64,
    total_bookings: u32,
) -> bool {
    explicit.unwrap_or(accepting_bookings && (total_revenue > 0.0 || total_bookings > 0))
}
