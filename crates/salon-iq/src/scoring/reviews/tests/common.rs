use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::scoring::reviews::{
    ReviewRecord, ReviewScoringConfig, ReviewTrustEvaluator, SentimentLexicon,
};

pub(super) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

pub(super) fn evaluator() -> ReviewTrustEvaluator {
    ReviewTrustEvaluator::new(SentimentLexicon::default(), ReviewScoringConfig::default())
        .expect("default config is valid")
}

/// A review that trips none of the signals: mid-length lexicon-free comment,
/// unremarkable rating, verified, some engagement, posted well in the past.
pub(super) fn baseline_review() -> ReviewRecord {
    ReviewRecord {
        rating: Some(4),
        comment: "The stylist did a balanced job with my usual trim.".to_string(),
        is_verified: Some(true),
        helpful_count: Some(2),
        is_flagged: Some(false),
        created_at: Some(reference_now() - Duration::days(10)),
        has_response: Some(false),
    }
}
