use crate::infra::{resolve_salon_profile, AppState, SalonProfilePayload, ScoringEngines};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use salon_iq::scoring::{
    AppointmentRecord, ChurnAssessment, ComplianceResult, LicenseDerivation, ReputationStats,
    ReviewRecord, ReviewTrustReport,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ChurnRiskRequest {
    pub(crate) appointments: Vec<AppointmentRecord>,
    /// Evaluation instant; omitted means "now" at the boundary.
    #[serde(default)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewTrustRequest {
    pub(crate) review: ReviewRecord,
    #[serde(default)]
    pub(crate) reviewer: Option<ReputationStats>,
    #[serde(default)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SalonStandingRequest {
    pub(crate) salon: SalonProfilePayload,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SalonStandingResponse {
    pub(crate) compliance: ComplianceResult,
    pub(crate) health_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) license: Option<LicenseDerivation>,
}

/// Router builder exposing one POST endpoint per scorer plus the service
/// plumbing routes.
pub fn scoring_router(engines: Arc<ScoringEngines>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/customers/churn-risk",
            post(churn_risk_endpoint),
        )
        .route("/api/v1/reviews/trust", post(review_trust_endpoint))
        .route("/api/v1/salons/standing", post(salon_standing_endpoint))
        .with_state(engines)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn churn_risk_endpoint(
    State(engines): State<Arc<ScoringEngines>>,
    Json(payload): Json<ChurnRiskRequest>,
) -> Json<ChurnAssessment> {
    let as_of = payload.as_of.unwrap_or_else(Utc::now);
    Json(engines.churn.predict(&payload.appointments, as_of))
}

pub(crate) async fn review_trust_endpoint(
    State(engines): State<Arc<ScoringEngines>>,
    Json(payload): Json<ReviewTrustRequest>,
) -> Json<ReviewTrustReport> {
    let as_of = payload.as_of.unwrap_or_else(Utc::now);
    Json(
        engines
            .reviews
            .evaluate(&payload.review, payload.reviewer.as_ref(), as_of),
    )
}

pub(crate) async fn salon_standing_endpoint(
    State(engines): State<Arc<ScoringEngines>>,
    Json(payload): Json<SalonStandingRequest>,
) -> Json<SalonStandingResponse> {
    let today = payload
        .today
        .unwrap_or_else(|| Utc::now().date_naive());
    let (attributes, license) =
        resolve_salon_profile(&payload.salon, today, &engines.compliance);

    Json(SalonStandingResponse {
        compliance: engines.compliance.assess(&attributes),
        health_score: engines.compliance.health_score(&attributes),
        license,
    })
}
