use chrono::{DateTime, Utc};

use super::config::{FakeLikelihoodConfig, QualityConfig, ReputationConfig};
use super::domain::{ReputationStats, ReviewRecord};

const SECONDS_PER_HOUR: f64 = 3_600.0;

pub(crate) fn fake_likelihood_points(
    review: &ReviewRecord,
    now: DateTime<Utc>,
    config: &FakeLikelihoodConfig,
) -> f64 {
    let mut score = config.base;

    if review.is_flagged == Some(true) {
        score += config.flagged_penalty;
    }
    // An explicit "not verified" is a signal; an absent flag is not.
    if review.is_verified == Some(false) {
        score += config.unverified_penalty;
    }
    if review.comment.chars().count() < config.short_comment_length {
        score += config.short_comment_penalty;
    }
    if review.helpful_count.unwrap_or(0) == 0 {
        score += config.no_engagement_penalty;
    }
    if let Some(rating) = review.rating {
        if rating <= config.low_rating_cutoff || rating >= config.high_rating_cutoff {
            score += config.extreme_rating_penalty;
        }
    }
    if let Some(created_at) = review.created_at {
        // Absolute distance on purpose: a review timestamped in the future
        // still lands inside the "just posted" window. Known quirk, kept.
        let hours_apart = (now - created_at).num_seconds().abs() as f64 / SECONDS_PER_HOUR;
        if hours_apart < config.recent_window_hours {
            score += config.recency_penalty;
        }
    }

    score
}

pub(crate) fn quality_points(
    review: &ReviewRecord,
    sentiment_score: f64,
    config: &QualityConfig,
) -> f64 {
    let mut score = config.base;

    let comment_length = review.comment.chars().count();
    if comment_length > config.long_comment_length {
        score += config.long_comment_bonus;
    } else if comment_length < config.short_comment_length {
        score -= config.short_comment_penalty;
    }

    match review.helpful_count {
        Some(count) if count > config.helpful_threshold => score += config.helpful_bonus,
        Some(0) => score -= config.zero_helpful_penalty,
        _ => {}
    }

    if review.has_response == Some(true) {
        score += config.response_bonus;
    }
    if review.is_flagged == Some(true) {
        score -= config.flagged_penalty;
    }

    score + sentiment_score * config.sentiment_weight
}

pub(crate) fn reputation_points(stats: &ReputationStats, config: &ReputationConfig) -> f64 {
    if stats.total_reviews == 0 {
        return config.neutral_score;
    }

    let flagged_ratio = stats.flagged_reviews as f64 / stats.total_reviews as f64;
    let mut score = config.base - flagged_ratio * config.base;
    if stats.total_reviews < config.low_volume_threshold {
        score -= config.low_volume_penalty;
    }

    score
}
