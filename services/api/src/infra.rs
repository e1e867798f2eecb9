use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use salon_iq::error::AppError;
use salon_iq::scoring::{
    derive_verification_status, ChurnRiskPredictor, ChurnScoringConfig, ComplianceConfig,
    ComplianceHealthScorer, HealthWeights, LicenseDerivation, LicenseStatus, ReviewScoringConfig,
    ReviewTrustEvaluator, SalonAttributes, SentimentLexicon,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The three engines shared across requests. Each is stateless, so one set
/// serves every connection without coordination.
pub struct ScoringEngines {
    pub(crate) churn: ChurnRiskPredictor,
    pub(crate) reviews: ReviewTrustEvaluator,
    pub(crate) compliance: ComplianceHealthScorer,
}

pub fn build_engines(lexicon_path: Option<&Path>) -> Result<ScoringEngines, AppError> {
    let lexicon = match lexicon_path {
        Some(path) => load_lexicon(path)?,
        None => SentimentLexicon::default(),
    };

    Ok(ScoringEngines {
        churn: ChurnRiskPredictor::new(ChurnScoringConfig::default())?,
        reviews: ReviewTrustEvaluator::new(lexicon, ReviewScoringConfig::default())?,
        compliance: ComplianceHealthScorer::new(
            ComplianceConfig::default(),
            HealthWeights::default(),
        )?,
    })
}

fn load_lexicon(path: &Path) -> Result<SentimentLexicon, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let lexicon = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    Ok(lexicon)
}

/// Salon fields as portals submit them; verification and license state may
/// arrive explicit or get derived from activity and expiry.
#[derive(Debug, Deserialize)]
pub(crate) struct SalonProfilePayload {
    #[serde(default)]
    pub(crate) is_verified: Option<bool>,
    #[serde(default = "default_accepting")]
    pub(crate) accepting_bookings: bool,
    #[serde(default)]
    pub(crate) license_status: Option<LicenseStatus>,
    #[serde(default)]
    pub(crate) license_expires_at: Option<NaiveDate>,
    pub(crate) rating_average: f64,
    pub(crate) total_bookings: u32,
    pub(crate) total_revenue: f64,
    pub(crate) employee_count: u32,
    #[serde(default)]
    pub(crate) max_staff: u32,
}

fn default_accepting() -> bool {
    true
}

/// Resolve the payload into scoring attributes. The derivation is returned
/// only when the license state came from an expiry date, so responses can
/// echo how it was decided.
pub(crate) fn resolve_salon_profile(
    payload: &SalonProfilePayload,
    today: NaiveDate,
    scorer: &ComplianceHealthScorer,
) -> (SalonAttributes, Option<LicenseDerivation>) {
    let (license_status, derivation) = match payload.license_status {
        Some(status) => (status, None),
        None => {
            let derived = scorer.license_status(payload.license_expires_at, today);
            (derived.status, Some(derived))
        }
    };

    let is_verified = derive_verification_status(
        payload.is_verified,
        payload.accepting_bookings,
        payload.total_revenue,
        payload.total_bookings,
    );

    let attributes = SalonAttributes {
        is_verified,
        license_status,
        rating_average: payload.rating_average,
        total_bookings: payload.total_bookings,
        total_revenue: payload.total_revenue,
        employee_count: payload.employee_count,
        max_staff: payload.max_staff,
    };

    (attributes, derivation)
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}
