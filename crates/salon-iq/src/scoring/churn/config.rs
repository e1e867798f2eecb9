use serde::{Deserialize, Serialize};

use super::domain::RiskLevel;
use crate::scoring::bands::{BandsError, ScoreBands};

/// Tunable weights and cutoffs for churn prediction. Defaults carry the
/// production tuning; overriding any field never requires touching the
/// control flow in `rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnScoringConfig {
    /// A gap beyond `avg * overdue_gap_multiplier` marks the customer overdue.
    pub overdue_gap_multiplier: f64,
    pub overdue_weight: f64,
    pub approaching_gap_multiplier: f64,
    pub approaching_weight: f64,
    /// Absolute fallback when no personal cadence is known.
    pub long_absence_days: f64,
    pub long_absence_weight: f64,
    pub high_cancellation_rate: f64,
    pub high_cancellation_weight: f64,
    pub moderate_cancellation_rate: f64,
    pub moderate_cancellation_weight: f64,
    pub high_no_show_rate: f64,
    pub high_no_show_weight: f64,
    pub some_no_show_rate: f64,
    pub some_no_show_weight: f64,
    /// Visits sampled for the recent-cadence comparison.
    pub recent_gap_window: usize,
    pub declining_frequency_multiplier: f64,
    pub declining_frequency_weight: f64,
    /// Below this many completed visits the customer counts as new.
    pub established_visit_count: u32,
    pub new_customer_weight: f64,
    pub critical_cutoff: f64,
    pub high_cutoff: f64,
    pub medium_cutoff: f64,
}

impl Default for ChurnScoringConfig {
    fn default() -> Self {
        Self {
            overdue_gap_multiplier: 2.0,
            overdue_weight: 30.0,
            approaching_gap_multiplier: 1.5,
            approaching_weight: 20.0,
            long_absence_days: 90.0,
            long_absence_weight: 25.0,
            high_cancellation_rate: 0.30,
            high_cancellation_weight: 25.0,
            moderate_cancellation_rate: 0.15,
            moderate_cancellation_weight: 15.0,
            high_no_show_rate: 0.20,
            high_no_show_weight: 20.0,
            some_no_show_rate: 0.10,
            some_no_show_weight: 10.0,
            recent_gap_window: 3,
            declining_frequency_multiplier: 1.3,
            declining_frequency_weight: 15.0,
            established_visit_count: 3,
            new_customer_weight: 10.0,
            critical_cutoff: 70.0,
            high_cutoff: 50.0,
            medium_cutoff: 30.0,
        }
    }
}

impl ChurnScoringConfig {
    pub(crate) fn risk_bands(&self) -> Result<ScoreBands<RiskLevel>, BandsError> {
        ScoreBands::new(
            vec![
                (self.critical_cutoff, RiskLevel::Critical),
                (self.high_cutoff, RiskLevel::High),
                (self.medium_cutoff, RiskLevel::Medium),
            ],
            RiskLevel::Low,
        )
    }
}
