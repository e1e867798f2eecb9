use super::common::*;
use crate::scoring::churn::{AppointmentStatus, RiskLevel};

#[test]
fn empty_history_returns_unknown() {
    let assessment = predictor().predict(&[], reference_now());

    assert_eq!(assessment.risk_level, RiskLevel::Unknown);
    assert_eq!(assessment.risk_score, 0);
    assert!(assessment.factors.is_empty());
    assert_eq!(assessment.recommendation, "No appointment history available");
    assert_eq!(assessment.total_visits, 0);
    assert_eq!(assessment.days_since_last_visit, None);
}

#[test]
fn overdue_regular_lands_in_medium() {
    // Five visits every 30 days, the newest 200 days back: the overdue factor
    // alone fires.
    let history = completed_cadence(5, 30, 200);

    let assessment = predictor().predict(&history, reference_now());

    assert_eq!(assessment.risk_score, 30);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert_eq!(assessment.factors, vec!["Overdue for return visit".to_string()]);
    assert_eq!(assessment.days_since_last_visit, Some(200));
    assert_eq!(assessment.avg_days_between_visits, 30);
    assert_eq!(assessment.total_visits, 5);
    assert_eq!(assessment.cancellation_rate_pct, 0);
}

#[test]
fn approaching_window_scores_below_overdue() {
    // Gap of 50 days against a 30-day cadence: past 1.5x but short of 2x.
    let history = completed_cadence(5, 30, 50);

    let assessment = predictor().predict(&history, reference_now());

    assert_eq!(assessment.risk_score, 20);
    assert_eq!(
        assessment.factors,
        vec!["Approaching typical return window".to_string()]
    );
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}

#[test]
fn cancellations_never_lower_the_score() {
    let mut previous = 0;
    for cancel_count in 0..6 {
        let mut history = completed_cadence(5, 30, 10);
        history.extend(cancellations(cancel_count));

        let assessment = predictor().predict(&history, reference_now());
        assert!(
            assessment.risk_score >= previous,
            "score dropped from {previous} to {} at {cancel_count} cancellations",
            assessment.risk_score
        );
        previous = assessment.risk_score;
    }
}

#[test]
fn heavy_cancellation_history_is_flagged() {
    let mut history = completed_cadence(5, 30, 10);
    history.extend(cancellations(2));

    let assessment = predictor().predict(&history, reference_now());

    // 2 cancellations over 5 completed visits is a 40% rate.
    assert_eq!(assessment.cancellation_rate_pct, 40);
    assert!(assessment
        .factors
        .contains(&"High cancellation rate".to_string()));
}

#[test]
fn no_shows_accumulate_with_other_factors() {
    let mut history = completed_cadence(3, 30, 150);
    history.push(appointment("ns-1", AppointmentStatus::NoShow, Some(20)));
    history.extend(cancellations(2));

    let assessment = predictor().predict(&history, reference_now());

    // Overdue (+30), cancellation rate 2/3 (+25), no-show rate 1/3 (+20).
    assert_eq!(assessment.risk_score, 75);
    assert_eq!(assessment.risk_level, RiskLevel::Critical);
    assert_eq!(
        assessment.recommendation,
        "Reach out immediately with a personalized offer"
    );
    assert_eq!(
        assessment.factors,
        vec![
            "Overdue for return visit".to_string(),
            "High cancellation rate".to_string(),
            "High no-show rate".to_string(),
        ]
    );
}

#[test]
fn slowing_cadence_adds_frequency_factor() {
    // Gaps of 10, 10, 10, 40, 40 days: the recent pace is well past 1.3x the
    // overall average while the last visit is current.
    let history: Vec<_> = [110, 100, 90, 80, 40, 0]
        .iter()
        .enumerate()
        .map(|(index, days)| {
            appointment(
                &format!("appt-{index}"),
                AppointmentStatus::Completed,
                Some(*days),
            )
        })
        .collect();

    let assessment = predictor().predict(&history, reference_now());

    assert_eq!(
        assessment.factors,
        vec!["Decreasing visit frequency".to_string()]
    );
    assert_eq!(assessment.risk_score, 15);
}

#[test]
fn sparse_history_marks_new_customer() {
    let history = completed_cadence(2, 20, 10);

    let assessment = predictor().predict(&history, reference_now());

    assert_eq!(assessment.risk_score, 10);
    assert_eq!(
        assessment.factors,
        vec!["New customer with few visits".to_string()]
    );
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}

#[test]
fn cancellation_only_history_counts_as_long_absence() {
    let history = cancellations(3);

    let assessment = predictor().predict(&history, reference_now());

    // No completed visit exists, so the absence is unbounded and the metric
    // has no finite value to report.
    assert_eq!(assessment.days_since_last_visit, None);
    assert_eq!(assessment.total_visits, 0);
    assert_eq!(assessment.cancellation_rate_pct, 0);
    assert_eq!(
        assessment.factors,
        vec![
            "Long time since last visit".to_string(),
            "New customer with few visits".to_string(),
        ]
    );
    assert_eq!(assessment.risk_score, 35);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
}

#[test]
fn untimestamped_completed_visits_count_toward_totals_only() {
    let history: Vec<_> = (0..3)
        .map(|index| {
            appointment(
                &format!("appt-{index}"),
                AppointmentStatus::Completed,
                None,
            )
        })
        .collect();

    let assessment = predictor().predict(&history, reference_now());

    assert_eq!(assessment.total_visits, 3);
    assert_eq!(assessment.days_since_last_visit, None);
    assert_eq!(assessment.avg_days_between_visits, 0);
    assert_eq!(assessment.factors, vec!["Long time since last visit".to_string()]);
}

#[test]
fn score_is_clamped_and_deterministic() {
    let mut history = completed_cadence(3, 30, 400);
    history.extend(cancellations(9));
    for index in 0..9 {
        history.push(appointment(
            &format!("ns-{index}"),
            AppointmentStatus::NoShow,
            Some(15 + index),
        ));
    }

    let first = predictor().predict(&history, reference_now());
    let second = predictor().predict(&history, reference_now());

    assert!(first.risk_score <= 100);
    assert_eq!(first, second);
}
