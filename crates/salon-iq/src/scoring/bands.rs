//! Shared numeric primitives for the scoring engines: range clamping and
//! ordered threshold classification.

/// Bound `value` to `[min, max]`.
pub fn clamp_score(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

/// Ordered `(cutoff, label)` pairs evaluated high-to-low, with a fallback
/// label for scores below every cutoff. Cutoffs must be strictly descending;
/// the constructor rejects anything else so `classify` never has to.
#[derive(Debug, Clone)]
pub struct ScoreBands<L> {
    cutoffs: Vec<(f64, L)>,
    fallback: L,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BandsError {
    #[error("band cutoff at position {position} does not strictly descend")]
    NotDescending { position: usize },
    #[error("band cutoff at position {position} is not a finite number")]
    NotFinite { position: usize },
}

impl<L: Copy> ScoreBands<L> {
    pub fn new(cutoffs: Vec<(f64, L)>, fallback: L) -> Result<Self, BandsError> {
        for (position, (cutoff, _)) in cutoffs.iter().enumerate() {
            if !cutoff.is_finite() {
                return Err(BandsError::NotFinite { position });
            }
        }
        for (position, pair) in cutoffs.windows(2).enumerate() {
            if pair[1].0 >= pair[0].0 {
                return Err(BandsError::NotDescending {
                    position: position + 1,
                });
            }
        }

        Ok(Self { cutoffs, fallback })
    }

    /// First label whose cutoff the score meets or exceeds.
    pub fn classify(&self, score: f64) -> L {
        for (cutoff, label) in &self.cutoffs {
            if score >= *cutoff {
                return *label;
            }
        }
        self.fallback
    }
}
