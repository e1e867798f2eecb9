//! HTTP-level specifications for the scoring endpoints, driven through the
//! router exactly as a portal client would call them.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

use salon_iq_api::{build_engines, scoring_router};

fn router() -> axum::Router {
    scoring_router(Arc::new(build_engines(None).expect("default engines build")))
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");

    let response = tower::ServiceExt::oneshot(router(), request)
        .await
        .expect("router dispatch");

    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    (status, payload)
}

#[tokio::test]
async fn healthcheck_responds_ok() {
    let response = tower::ServiceExt::oneshot(
        router(),
        Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn churn_risk_endpoint_scores_a_posted_history() {
    let (status, payload) = post_json(
        "/api/v1/customers/churn-risk",
        json!({
            "appointments": [
                { "id": "a-1", "customer_id": "c-1", "start_time": "2025-08-13T10:00:00Z", "status": "completed" },
                { "id": "a-2", "customer_id": "c-1", "start_time": "2025-09-12T10:00:00Z", "status": "completed" },
                { "id": "a-3", "customer_id": "c-1", "start_time": null, "status": "cancelled" }
            ],
            "as_of": "2026-03-01T10:00:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Overdue against a 30-day cadence, a 50% cancellation rate, and a thin
    // track record stack up to the high band.
    assert_eq!(payload.get("total_visits"), Some(&json!(2)));
    assert_eq!(payload.get("risk_level"), Some(&json!("high")));
    assert!(payload
        .get("factors")
        .and_then(Value::as_array)
        .is_some_and(|factors| !factors.is_empty()));
}

#[tokio::test]
async fn review_trust_endpoint_reports_every_metric() {
    let (status, payload) = post_json(
        "/api/v1/reviews/trust",
        json!({
            "review": {
                "rating": 5,
                "comment": "Great!",
                "is_verified": false,
                "helpful_count": 0,
                "is_flagged": false,
                "created_at": "2026-03-01T09:30:00Z",
                "has_response": false
            },
            "reviewer": { "total_reviews": 1, "flagged_reviews": 0 },
            "as_of": "2026-03-01T10:00:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Unverified, unhelpful, terse, five-star, and fresh: 85 of 100.
    assert_eq!(
        payload.pointer("/fake_likelihood/score"),
        Some(&json!(85))
    );
    assert_eq!(
        payload.pointer("/fake_likelihood/label"),
        Some(&json!("high"))
    );
    assert_eq!(payload.pointer("/sentiment/label"), Some(&json!("positive")));
    assert_eq!(payload.pointer("/reputation/score"), Some(&json!(70)));
}

#[tokio::test]
async fn salon_standing_endpoint_returns_compliance_and_health() {
    let (status, payload) = post_json(
        "/api/v1/salons/standing",
        json!({
            "salon": {
                "is_verified": true,
                "license_status": "valid",
                "rating_average": 4.8,
                "total_bookings": 50,
                "total_revenue": 80000.0,
                "employee_count": 5,
                "max_staff": 10
            },
            "today": "2026-03-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.pointer("/compliance/score"), Some(&json!(85)));
    assert_eq!(payload.pointer("/compliance/level"), Some(&json!("low")));
    assert_eq!(
        payload.pointer("/compliance/issues"),
        Some(&json!([]))
    );
    assert_eq!(payload.get("health_score"), Some(&json!(61)));
    assert!(payload.get("license").is_none());
}

#[tokio::test]
async fn malformed_payloads_are_rejected_at_the_boundary() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/customers/churn-risk")
        .header("content-type", "application/json")
        .body(Body::from("{\"appointments\": \"not-a-list\"}"))
        .expect("request");

    let response = tower::ServiceExt::oneshot(router(), request)
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
