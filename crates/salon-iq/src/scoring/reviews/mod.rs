//! Review trust evaluation: tone, authenticity, substance, and reviewer
//! standing, each a pure function over a single review record (plus
//! aggregate reviewer counts for reputation).

mod config;
mod domain;
mod rules;
mod sentiment;

#[cfg(test)]
mod tests;

pub use config::{
    FakeLikelihoodConfig, QualityConfig, ReputationConfig, ReviewScoringConfig, SentimentConfig,
};
pub use domain::{
    FakeLikelihoodLabel, FakeLikelihoodResult, QualityLabel, QualityScoreResult, ReputationLabel,
    ReputationResult, ReputationStats, ReviewRecord, ReviewTrustReport, SentimentLabel,
    SentimentResult,
};
pub use sentiment::SentimentLexicon;

use chrono::{DateTime, Utc};

use crate::scoring::bands::{clamp_score, BandsError, ScoreBands};

/// Stateless evaluator bundling the lexicon and per-metric configs. The four
/// metrics stay independent; `evaluate` only composes them for callers that
/// want the whole picture at once.
pub struct ReviewTrustEvaluator {
    lexicon: SentimentLexicon,
    config: ReviewScoringConfig,
    fake_bands: ScoreBands<FakeLikelihoodLabel>,
    quality_bands: ScoreBands<QualityLabel>,
    reputation_bands: ScoreBands<ReputationLabel>,
}

impl ReviewTrustEvaluator {
    pub fn new(
        lexicon: SentimentLexicon,
        config: ReviewScoringConfig,
    ) -> Result<Self, BandsError> {
        let fake_bands = config.fake_likelihood.bands()?;
        let quality_bands = config.quality.bands()?;
        let reputation_bands = config.reputation.bands()?;

        Ok(Self {
            lexicon,
            config,
            fake_bands,
            quality_bands,
            reputation_bands,
        })
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ReviewScoringConfig {
        &self.config
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        sentiment::analyze(text, &self.lexicon, &self.config.sentiment)
    }

    pub fn estimate_fake_likelihood(
        &self,
        review: &ReviewRecord,
        now: DateTime<Utc>,
    ) -> FakeLikelihoodResult {
        let raw = rules::fake_likelihood_points(review, now, &self.config.fake_likelihood);
        let score = clamp_score(raw, 0.0, 100.0);

        FakeLikelihoodResult {
            score: score.round() as u8,
            label: self.fake_bands.classify(score),
        }
    }

    /// `sentiment_score` is the [-1, 1] value from `analyze_sentiment`,
    /// injected so callers can reuse one analysis across metrics.
    pub fn calculate_quality_score(
        &self,
        review: &ReviewRecord,
        sentiment_score: f64,
    ) -> QualityScoreResult {
        let raw = rules::quality_points(review, sentiment_score, &self.config.quality);
        let score = clamp_score(raw, 0.0, 100.0);

        QualityScoreResult {
            score: score.round() as u8,
            label: self.quality_bands.classify(score),
        }
    }

    pub fn compute_reviewer_reputation(&self, stats: &ReputationStats) -> ReputationResult {
        let raw = rules::reputation_points(stats, &self.config.reputation);
        let score = clamp_score(raw, 0.0, 100.0);

        ReputationResult {
            score: score.round() as u8,
            label: self.reputation_bands.classify(score),
        }
    }

    pub fn evaluate(
        &self,
        review: &ReviewRecord,
        reviewer: Option<&ReputationStats>,
        now: DateTime<Utc>,
    ) -> ReviewTrustReport {
        let sentiment = self.analyze_sentiment(&review.comment);
        let fake_likelihood = self.estimate_fake_likelihood(review, now);
        let quality = self.calculate_quality_score(review, sentiment.score);
        let reputation = reviewer.map(|stats| self.compute_reviewer_reputation(stats));

        ReviewTrustReport {
            sentiment,
            fake_likelihood,
            quality,
            reputation,
        }
    }
}

impl Default for ReviewTrustEvaluator {
    fn default() -> Self {
        Self::new(SentimentLexicon::default(), ReviewScoringConfig::default())
            .expect("default review cutoffs are descending")
    }
}
