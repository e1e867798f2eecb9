use serde::{Deserialize, Serialize};

use super::domain::ComplianceLevel;
use crate::scoring::bands::{BandsError, ScoreBands};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceConfig {
    pub base: f64,
    pub unverified_penalty: f64,
    pub expired_license_penalty: f64,
    pub expiring_license_penalty: f64,
    pub unknown_license_penalty: f64,
    pub overstaffed_penalty: f64,
    pub low_rating_cutoff: f64,
    pub low_rating_penalty: f64,
    pub strong_rating_cutoff: f64,
    pub strong_rating_bonus: f64,
    pub sparse_booking_cutoff: u32,
    pub sparse_booking_penalty: f64,
    /// Licenses expiring within this many days count as `Expiring`.
    pub expiring_window_days: i64,
    pub low_risk_cutoff: f64,
    pub medium_risk_cutoff: f64,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            base: 80.0,
            unverified_penalty: 20.0,
            expired_license_penalty: 25.0,
            expiring_license_penalty: 10.0,
            unknown_license_penalty: 5.0,
            overstaffed_penalty: 15.0,
            low_rating_cutoff: 3.0,
            low_rating_penalty: 10.0,
            strong_rating_cutoff: 4.5,
            strong_rating_bonus: 5.0,
            sparse_booking_cutoff: 5,
            sparse_booking_penalty: 5.0,
            expiring_window_days: 30,
            low_risk_cutoff: 80.0,
            medium_risk_cutoff: 60.0,
        }
    }
}

impl ComplianceConfig {
    /// Risk level falls as the score rises, so the good label sits on the
    /// highest cutoff.
    pub(crate) fn risk_bands(&self) -> Result<ScoreBands<ComplianceLevel>, BandsError> {
        ScoreBands::new(
            vec![
                (self.low_risk_cutoff, ComplianceLevel::Low),
                (self.medium_risk_cutoff, ComplianceLevel::Medium),
            ],
            ComplianceLevel::High,
        )
    }
}

/// Factor weights and saturation points for the operational health composite.
/// Weights are intended to sum to 1; each factor is clamped to [0, 1] before
/// weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthWeights {
    pub rating_weight: f64,
    pub booking_weight: f64,
    pub revenue_weight: f64,
    pub staffing_weight: f64,
    pub rating_scale: f64,
    pub booking_saturation: f64,
    pub revenue_saturation: f64,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            rating_weight: 0.35,
            booking_weight: 0.25,
            revenue_weight: 0.30,
            staffing_weight: 0.10,
            rating_scale: 5.0,
            booking_saturation: 200.0,
            revenue_saturation: 150_000.0,
        }
    }
}
