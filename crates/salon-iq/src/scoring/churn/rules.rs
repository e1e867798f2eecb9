use chrono::{DateTime, Utc};

use super::config::ChurnScoringConfig;
use super::domain::{AppointmentRecord, AppointmentStatus};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Derived visit statistics feeding the factor accumulation. Rates divide by
/// the completed-visit count, so a cancel-heavy history can exceed 1.0.
pub(crate) struct VisitMetrics {
    pub(crate) total_visits: usize,
    /// `+inf` when no completed visit carries a timestamp.
    pub(crate) days_since_last_visit: f64,
    pub(crate) avg_gap_days: f64,
    /// Mean gap across the most recent visits, when enough are timestamped.
    pub(crate) recent_avg_gap_days: Option<f64>,
    pub(crate) cancellation_rate: f64,
    pub(crate) no_show_rate: f64,
}

pub(crate) fn visit_metrics(
    appointments: &[AppointmentRecord],
    now: DateTime<Utc>,
    config: &ChurnScoringConfig,
) -> VisitMetrics {
    let mut total_visits = 0usize;
    let mut cancelled = 0usize;
    let mut no_shows = 0usize;
    let mut completed_times: Vec<DateTime<Utc>> = Vec::new();

    for appointment in appointments {
        match appointment.status {
            AppointmentStatus::Completed => {
                total_visits += 1;
                if let Some(start) = appointment.start_time {
                    completed_times.push(start);
                }
            }
            AppointmentStatus::Cancelled => cancelled += 1,
            AppointmentStatus::NoShow => no_shows += 1,
            AppointmentStatus::Confirmed | AppointmentStatus::Pending => {}
        }
    }

    completed_times.sort_unstable();

    let days_since_last_visit = completed_times
        .last()
        .map(|last| (now - *last).num_seconds() as f64 / SECONDS_PER_DAY)
        .unwrap_or(f64::INFINITY);

    let gaps: Vec<f64> = completed_times
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds() as f64 / SECONDS_PER_DAY)
        .collect();
    let avg_gap_days = mean(&gaps).unwrap_or(0.0);

    // A window of n visits spans n-1 gaps; anything below 2 has no cadence.
    let recent_avg_gap_days = if config.recent_gap_window >= 2
        && completed_times.len() >= config.recent_gap_window
    {
        mean(&gaps[gaps.len() - (config.recent_gap_window - 1)..])
    } else {
        None
    };

    let (cancellation_rate, no_show_rate) = if total_visits == 0 {
        (0.0, 0.0)
    } else {
        (
            cancelled as f64 / total_visits as f64,
            no_shows as f64 / total_visits as f64,
        )
    };

    VisitMetrics {
        total_visits,
        days_since_last_visit,
        avg_gap_days,
        recent_avg_gap_days,
        cancellation_rate,
        no_show_rate,
    }
}

/// Accumulate risk deltas in a fixed order so the factor list is stable for
/// identical inputs.
pub(crate) fn accumulate_risk(
    metrics: &VisitMetrics,
    config: &ChurnScoringConfig,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut factors = Vec::new();

    let avg = metrics.avg_gap_days;
    let since = metrics.days_since_last_visit;
    if avg > 0.0 && since > avg * config.overdue_gap_multiplier {
        score += config.overdue_weight;
        factors.push("Overdue for return visit".to_string());
    } else if avg > 0.0 && since > avg * config.approaching_gap_multiplier {
        score += config.approaching_weight;
        factors.push("Approaching typical return window".to_string());
    } else if since > config.long_absence_days {
        score += config.long_absence_weight;
        factors.push("Long time since last visit".to_string());
    }

    if metrics.cancellation_rate > config.high_cancellation_rate {
        score += config.high_cancellation_weight;
        factors.push("High cancellation rate".to_string());
    } else if metrics.cancellation_rate > config.moderate_cancellation_rate {
        score += config.moderate_cancellation_weight;
        factors.push("Moderate cancellation rate".to_string());
    }

    if metrics.no_show_rate > config.high_no_show_rate {
        score += config.high_no_show_weight;
        factors.push("High no-show rate".to_string());
    } else if metrics.no_show_rate > config.some_no_show_rate {
        score += config.some_no_show_weight;
        factors.push("Some no-shows".to_string());
    }

    if metrics.total_visits >= config.established_visit_count as usize {
        if let Some(recent) = metrics.recent_avg_gap_days {
            if avg > 0.0 && recent > avg * config.declining_frequency_multiplier {
                score += config.declining_frequency_weight;
                factors.push("Decreasing visit frequency".to_string());
            }
        }
    }

    if metrics.total_visits < config.established_visit_count as usize {
        score += config.new_customer_weight;
        factors.push("New customer with few visits".to_string());
    }

    (score, factors)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
