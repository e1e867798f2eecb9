//! Salon compliance standing and operational health.

mod config;
mod domain;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{ComplianceConfig, HealthWeights};
pub use domain::{ComplianceLevel, ComplianceResult, LicenseDerivation, LicenseStatus, SalonAttributes};
pub use rules::{derive_license_status, derive_verification_status};

use chrono::NaiveDate;

use crate::scoring::bands::{clamp_score, BandsError, ScoreBands};

/// Stateless scorer over a salon's attribute snapshot.
pub struct ComplianceHealthScorer {
    config: ComplianceConfig,
    weights: HealthWeights,
    bands: ScoreBands<ComplianceLevel>,
}

impl ComplianceHealthScorer {
    pub fn new(config: ComplianceConfig, weights: HealthWeights) -> Result<Self, BandsError> {
        let bands = config.risk_bands()?;
        Ok(Self {
            config,
            weights,
            bands,
        })
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    pub fn assess(&self, attributes: &SalonAttributes) -> ComplianceResult {
        let (raw_score, issues) = rules::compliance_findings(attributes, &self.config);
        let score = clamp_score(raw_score, 0.0, 100.0);

        ComplianceResult {
            score: score.round() as u8,
            level: self.bands.classify(score),
            issues,
        }
    }

    /// Weighted composite of rating, volume, revenue, and staffing in
    /// [0, 100].
    pub fn health_score(&self, attributes: &SalonAttributes) -> u8 {
        let composite = rules::health_composite(attributes, &self.weights);
        (clamp_score(composite, 0.0, 1.0) * 100.0).round() as u8
    }

    pub fn license_status(
        &self,
        expires_at: Option<NaiveDate>,
        today: NaiveDate,
    ) -> LicenseDerivation {
        rules::derive_license_status(expires_at, today, self.config.expiring_window_days)
    }
}

impl Default for ComplianceHealthScorer {
    fn default() -> Self {
        Self::new(ComplianceConfig::default(), HealthWeights::default())
            .expect("default compliance cutoffs are descending")
    }
}
