//! Churn-risk prediction from a customer's appointment history.
//!
//! The predictor is a pure function of the supplied records and an explicit
//! `now`; callers fetch history, call [`ChurnRiskPredictor::predict`], and
//! render or store the returned assessment themselves.

mod config;
mod domain;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ChurnScoringConfig;
pub use domain::{AppointmentRecord, AppointmentStatus, ChurnAssessment, RiskLevel};

use chrono::{DateTime, Utc};

use crate::scoring::bands::{clamp_score, BandsError, ScoreBands};

/// Stateless engine applying the churn rubric to appointment histories.
pub struct ChurnRiskPredictor {
    config: ChurnScoringConfig,
    bands: ScoreBands<RiskLevel>,
}

impl ChurnRiskPredictor {
    /// Validates the band cutoffs once up front so prediction is total.
    pub fn new(config: ChurnScoringConfig) -> Result<Self, BandsError> {
        let bands = config.risk_bands()?;
        Ok(Self { config, bands })
    }

    pub fn config(&self) -> &ChurnScoringConfig {
        &self.config
    }

    pub fn predict(
        &self,
        appointments: &[AppointmentRecord],
        now: DateTime<Utc>,
    ) -> ChurnAssessment {
        if appointments.is_empty() {
            return ChurnAssessment::no_history();
        }

        let metrics = rules::visit_metrics(appointments, now, &self.config);
        let (raw_score, factors) = rules::accumulate_risk(&metrics, &self.config);
        let risk_score = clamp_score(raw_score, 0.0, 100.0);
        let risk_level = self.bands.classify(risk_score);

        ChurnAssessment {
            risk_level,
            risk_score: risk_score.round() as u8,
            factors,
            recommendation: risk_level.recommendation().to_string(),
            days_since_last_visit: metrics
                .days_since_last_visit
                .is_finite()
                .then(|| metrics.days_since_last_visit.round() as i64),
            avg_days_between_visits: metrics.avg_gap_days.round() as i64,
            total_visits: metrics.total_visits as u32,
            cancellation_rate_pct: (metrics.cancellation_rate * 100.0).round() as u32,
            no_show_rate_pct: (metrics.no_show_rate * 100.0).round() as u32,
        }
    }
}

impl Default for ChurnRiskPredictor {
    fn default() -> Self {
        Self::new(ChurnScoringConfig::default()).expect("default churn cutoffs are descending")
    }
}
