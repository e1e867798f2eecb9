//! Heuristic scoring engines for the booking platform.
//!
//! Each family is a pure, synchronous function of its inputs plus an
//! explicitly supplied time reference; nothing in this module reads the
//! wall clock, touches storage, or holds state between calls. Callers fetch
//! records, hand them to a scorer, and consume the returned value objects.

pub mod bands;
pub mod churn;
pub mod compliance;
pub mod reviews;

pub use bands::{clamp_score, BandsError, ScoreBands};
pub use churn::{
    AppointmentRecord, AppointmentStatus, ChurnAssessment, ChurnRiskPredictor, ChurnScoringConfig,
    RiskLevel,
};
pub use compliance::{
    derive_license_status, derive_verification_status, ComplianceConfig, ComplianceHealthScorer,
    ComplianceLevel, ComplianceResult, HealthWeights, LicenseDerivation, LicenseStatus,
    SalonAttributes,
};
pub use reviews::{
    FakeLikelihoodConfig, FakeLikelihoodLabel, FakeLikelihoodResult, QualityConfig, QualityLabel,
    QualityScoreResult, ReputationConfig, ReputationLabel, ReputationResult, ReputationStats,
    ReviewRecord, ReviewScoringConfig, ReviewTrustEvaluator, ReviewTrustReport, SentimentConfig,
    SentimentLabel, SentimentLexicon, SentimentResult,
};
