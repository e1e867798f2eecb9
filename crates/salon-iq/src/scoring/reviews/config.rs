use serde::{Deserialize, Serialize};

use super::domain::{FakeLikelihoodLabel, QualityLabel, ReputationLabel};
use crate::scoring::bands::{BandsError, ScoreBands};

/// Bundle of the per-metric review configs, loadable as one tuning document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewScoringConfig {
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub fake_likelihood: FakeLikelihoodConfig,
    #[serde(default)]
    pub quality: QualityConfig,
    #[serde(default)]
    pub reputation: ReputationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Symmetric labeling cutoff: at or above it is positive, at or below
    /// its negation is negative.
    pub label_cutoff: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self { label_cutoff: 0.15 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakeLikelihoodConfig {
    pub base: f64,
    pub flagged_penalty: f64,
    pub unverified_penalty: f64,
    pub short_comment_length: usize,
    pub short_comment_penalty: f64,
    pub no_engagement_penalty: f64,
    pub low_rating_cutoff: u8,
    pub high_rating_cutoff: u8,
    pub extreme_rating_penalty: f64,
    pub recent_window_hours: f64,
    pub recency_penalty: f64,
    pub high_cutoff: f64,
    pub medium_cutoff: f64,
}

impl Default for FakeLikelihoodConfig {
    fn default() -> Self {
        Self {
            base: 20.0,
            flagged_penalty: 25.0,
            unverified_penalty: 20.0,
            short_comment_length: 30,
            short_comment_penalty: 20.0,
            no_engagement_penalty: 10.0,
            low_rating_cutoff: 2,
            high_rating_cutoff: 5,
            extreme_rating_penalty: 10.0,
            recent_window_hours: 24.0,
            recency_penalty: 5.0,
            high_cutoff: 70.0,
            medium_cutoff: 40.0,
        }
    }
}

impl FakeLikelihoodConfig {
    pub(crate) fn bands(&self) -> Result<ScoreBands<FakeLikelihoodLabel>, BandsError> {
        ScoreBands::new(
            vec![
                (self.high_cutoff, FakeLikelihoodLabel::High),
                (self.medium_cutoff, FakeLikelihoodLabel::Medium),
            ],
            FakeLikelihoodLabel::Low,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    pub base: f64,
    pub long_comment_length: usize,
    pub long_comment_bonus: f64,
    pub short_comment_length: usize,
    pub short_comment_penalty: f64,
    pub helpful_threshold: u32,
    pub helpful_bonus: f64,
    pub zero_helpful_penalty: f64,
    pub response_bonus: f64,
    pub flagged_penalty: f64,
    pub sentiment_weight: f64,
    pub high_cutoff: f64,
    pub medium_cutoff: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            base: 60.0,
            long_comment_length: 200,
            long_comment_bonus: 10.0,
            short_comment_length: 40,
            short_comment_penalty: 15.0,
            helpful_threshold: 3,
            helpful_bonus: 10.0,
            zero_helpful_penalty: 5.0,
            response_bonus: 5.0,
            flagged_penalty: 20.0,
            sentiment_weight: 10.0,
            high_cutoff: 75.0,
            medium_cutoff: 50.0,
        }
    }
}

impl QualityConfig {
    pub(crate) fn bands(&self) -> Result<ScoreBands<QualityLabel>, BandsError> {
        ScoreBands::new(
            vec![
                (self.high_cutoff, QualityLabel::High),
                (self.medium_cutoff, QualityLabel::Medium),
            ],
            QualityLabel::Low,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationConfig {
    /// Score assigned to reviewers with no history at all.
    pub neutral_score: f64,
    /// Starting score, also the weight of the flagged ratio against it.
    pub base: f64,
    pub low_volume_threshold: u32,
    pub low_volume_penalty: f64,
    pub trusted_cutoff: f64,
    pub neutral_cutoff: f64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            neutral_score: 50.0,
            base: 80.0,
            low_volume_threshold: 3,
            low_volume_penalty: 10.0,
            trusted_cutoff: 70.0,
            neutral_cutoff: 40.0,
        }
    }
}

impl ReputationConfig {
    pub(crate) fn bands(&self) -> Result<ScoreBands<ReputationLabel>, BandsError> {
        ScoreBands::new(
            vec![
                (self.trusted_cutoff, ReputationLabel::Trusted),
                (self.neutral_cutoff, ReputationLabel::Neutral),
            ],
            ReputationLabel::Risky,
        )
    }
}
