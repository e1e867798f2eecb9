use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::config::SentimentConfig;
use super::domain::{SentimentLabel, SentimentResult};
use crate::scoring::bands::clamp_score;

const DEFAULT_POSITIVE: [&str; 12] = [
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "perfect",
    "friendly",
    "professional",
    "clean",
    "recommend",
];

const DEFAULT_NEGATIVE: [&str; 12] = [
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "rude",
    "dirty",
    "disappointing",
    "poor",
    "unprofessional",
    "slow",
    "overpriced",
];

/// Word lists backing the tone heuristic. A data value rather than code so
/// deployments can localize or retune it (see `ScoringDataConfig`); the
/// default lists are the production tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        Self {
            positive: positive
                .into_iter()
                .map(|word| word.trim().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|word| word.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn positive_count(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_count(&self) -> usize {
        self.negative.len()
    }

    fn weigh(&self, token: &str) -> i32 {
        let mut weight = 0;
        if self.positive.contains(token) {
            weight += 1;
        }
        if self.negative.contains(token) {
            weight -= 1;
        }
        weight
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE.iter().map(|word| word.to_string()),
            DEFAULT_NEGATIVE.iter().map(|word| word.to_string()),
        )
    }
}

/// Lexicon-hit tone estimate, dampened by comment length so one strong word
/// in a long review does not dominate.
pub(crate) fn analyze(
    text: &str,
    lexicon: &SentimentLexicon,
    config: &SentimentConfig,
) -> SentimentResult {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|ch| if ch.is_ascii_alphabetic() { ch } else { ' ' })
        .collect();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if tokens.is_empty() {
        return SentimentResult {
            score: 0.0,
            label: SentimentLabel::Neutral,
        };
    }

    let raw: i32 = tokens.iter().map(|token| lexicon.weigh(token)).sum();
    let normalized = clamp_score(raw as f64 / (tokens.len() as f64).sqrt(), -1.0, 1.0);
    let score = (normalized * 1000.0).round() / 1000.0;

    let label = if score >= config.label_cutoff {
        SentimentLabel::Positive
    } else if score <= -config.label_cutoff {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentResult { score, label }
}
