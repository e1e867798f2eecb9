use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review row as stored by the platform. Optional fields stay optional all
/// the way into scoring; missing values default to neutral treatment there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: String,
    pub is_verified: Option<bool>,
    pub helpful_count: Option<u32>,
    pub is_flagged: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub has_response: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Normalized tone in [-1, 1], rounded to 3 decimals.
    pub score: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakeLikelihoodResult {
    pub score: u8,
    pub label: FakeLikelihoodLabel,
}

/// Polarity note: `High` means *likely inauthentic* — the bad end of this
/// metric, unlike `QualityLabel` where `High` is the good end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FakeLikelihoodLabel {
    High,
    Medium,
    Low,
}

impl FakeLikelihoodLabel {
    pub const fn label(self) -> &'static str {
        match self {
            FakeLikelihoodLabel::High => "high",
            FakeLikelihoodLabel::Medium => "medium",
            FakeLikelihoodLabel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScoreResult {
    pub score: u8,
    pub label: QualityLabel,
}

/// Polarity note: `High` means a *useful, substantive* review — the good end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    High,
    Medium,
    Low,
}

impl QualityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            QualityLabel::High => "high",
            QualityLabel::Medium => "medium",
            QualityLabel::Low => "low",
        }
    }
}

/// Aggregate counts for one reviewer, supplied by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationStats {
    pub total_reviews: u32,
    pub flagged_reviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationResult {
    pub score: u8,
    pub label: ReputationLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationLabel {
    Trusted,
    Neutral,
    Risky,
}

impl ReputationLabel {
    pub const fn label(self) -> &'static str {
        match self {
            ReputationLabel::Trusted => "trusted",
            ReputationLabel::Neutral => "neutral",
            ReputationLabel::Risky => "risky",
        }
    }
}

/// Combined view over one review, with the reviewer portion present only
/// when aggregate stats were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTrustReport {
    pub sentiment: SentimentResult,
    pub fake_likelihood: FakeLikelihoodResult,
    pub quality: QualityScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<ReputationResult>,
}
