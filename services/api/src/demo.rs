use crate::infra::{build_engines, parse_instant, ScoringEngines};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use salon_iq::error::AppError;
use salon_iq::imports::AppointmentHistoryImporter;
use salon_iq::scoring::{
    AppointmentRecord, AppointmentStatus, ChurnAssessment, LicenseStatus, ReputationStats,
    ReviewRecord, SalonAttributes,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ChurnReportArgs {
    /// Path to the appointment CSV export (Appointment ID, Customer ID, Start Time, Status)
    #[arg(long)]
    pub(crate) appointments: PathBuf,
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long, value_parser = parse_instant)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long, value_parser = parse_instant)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    /// Skip the review-trust portion of the demo
    #[arg(long)]
    pub(crate) skip_reviews: bool,
}

pub(crate) fn run_churn_report(args: ChurnReportArgs) -> Result<(), AppError> {
    let ChurnReportArgs {
        appointments,
        as_of,
    } = args;

    let records = AppointmentHistoryImporter::from_path(&appointments)?;
    let as_of = as_of.unwrap_or_else(Utc::now);
    let engines = build_engines(None)?;

    println!(
        "Churn report for {} appointment record(s), evaluated {}",
        records.len(),
        as_of.format("%Y-%m-%d %H:%M UTC")
    );
    render_churn_assessment(&engines.churn.predict(&records, as_of));

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, skip_reviews } = args;

    let now = as_of.unwrap_or_else(Utc::now);
    let engines = build_engines(None)?;

    println!("Salon IQ scoring demo (evaluated {})", now.format("%Y-%m-%d"));

    println!("\nCustomer churn risk");
    render_churn_assessment(&engines.churn.predict(&demo_history(now), now));

    if !skip_reviews {
        println!("\nReview trust");
        for (caption, review, reviewer) in demo_reviews(now) {
            let report = engines.reviews.evaluate(&review, reviewer.as_ref(), now);
            println!("- {caption}");
            println!(
                "  sentiment {} ({:.3}) | fake likelihood {} ({}) | quality {} ({})",
                report.sentiment.label.label(),
                report.sentiment.score,
                report.fake_likelihood.label.label(),
                report.fake_likelihood.score,
                report.quality.label.label(),
                report.quality.score
            );
            if let Some(reputation) = report.reputation {
                println!(
                    "  reviewer standing: {} ({})",
                    reputation.label.label(),
                    reputation.score
                );
            }
        }
    }

    println!("\nSalon standing");
    render_salon_standing(&engines, now);

    Ok(())
}

fn render_churn_assessment(assessment: &ChurnAssessment) {
    println!(
        "- Risk: {} ({}/100)",
        assessment.risk_level.label(),
        assessment.risk_score
    );
    match assessment.days_since_last_visit {
        Some(days) => println!(
            "- Last visit {days} day(s) ago | typical gap {} day(s) | {} completed visit(s)",
            assessment.avg_days_between_visits, assessment.total_visits
        ),
        None => println!(
            "- No timestamped completed visit | {} completed visit(s)",
            assessment.total_visits
        ),
    }
    println!(
        "- Cancellation rate {}% | no-show rate {}%",
        assessment.cancellation_rate_pct, assessment.no_show_rate_pct
    );

    if assessment.factors.is_empty() {
        println!("- Contributing factors: none");
    } else {
        println!("- Contributing factors:");
        for factor in &assessment.factors {
            println!("    - {factor}");
        }
    }
    println!("- Recommendation: {}", assessment.recommendation);
}

fn render_salon_standing(engines: &ScoringEngines, now: DateTime<Utc>) {
    let salon = demo_salon();
    let compliance = engines.compliance.assess(&salon);
    let health = engines.compliance.health_score(&salon);
    let license = engines
        .compliance
        .license_status(Some(now.date_naive() + Duration::days(21)), now.date_naive());

    println!(
        "- Compliance {} -> {} risk",
        compliance.score,
        compliance.level.label()
    );
    if compliance.issues.is_empty() {
        println!("- Open issues: none");
    } else {
        println!("- Open issues:");
        for issue in &compliance.issues {
            println!("    - {issue}");
        }
    }
    println!("- Operational health: {health}/100");
    println!(
        "- License check: {} ({} day(s) remaining)",
        license.status.label(),
        license
            .days_remaining
            .map(|days| days.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
}

fn demo_history(now: DateTime<Utc>) -> Vec<AppointmentRecord> {
    let mut history: Vec<AppointmentRecord> = (0..5)
        .map(|index| AppointmentRecord {
            id: format!("appt-{index}"),
            customer_id: "demo-customer".to_string(),
            start_time: Some(now - Duration::days(95 + 32 * index)),
            status: AppointmentStatus::Completed,
        })
        .collect();
    history.push(AppointmentRecord {
        id: "appt-cx".to_string(),
        customer_id: "demo-customer".to_string(),
        start_time: Some(now - Duration::days(70)),
        status: AppointmentStatus::Cancelled,
    });
    history
}

fn demo_reviews(
    now: DateTime<Utc>,
) -> Vec<(&'static str, ReviewRecord, Option<ReputationStats>)> {
    vec![
        (
            "Verified regular, detailed praise",
            ReviewRecord {
                rating: Some(5),
                comment: "Excellent balayage and a genuinely friendly, professional team. \
                          The space was clean and they ran exactly on time; I would happily \
                          recommend them to anyone looking for color work."
                    .to_string(),
                is_verified: Some(true),
                helpful_count: Some(7),
                is_flagged: Some(false),
                created_at: Some(now - Duration::days(12)),
                has_response: Some(true),
            },
            Some(ReputationStats {
                total_reviews: 14,
                flagged_reviews: 0,
            }),
        ),
        (
            "Unverified five-star posted minutes ago",
            ReviewRecord {
                rating: Some(5),
                comment: "Best ever!!".to_string(),
                is_verified: Some(false),
                helpful_count: Some(0),
                is_flagged: Some(false),
                created_at: Some(now - Duration::minutes(20)),
                has_response: Some(false),
            },
            Some(ReputationStats {
                total_reviews: 1,
                flagged_reviews: 0,
            }),
        ),
        (
            "Flagged complaint, no reviewer stats",
            ReviewRecord {
                rating: Some(1),
                comment: "Rude receptionist and a dirty sink. Terrible experience.".to_string(),
                is_verified: Some(true),
                helpful_count: Some(2),
                is_flagged: Some(true),
                created_at: Some(now - Duration::days(2)),
                has_response: Some(false),
            },
            None,
        ),
    ]
}

fn demo_salon() -> SalonAttributes {
    SalonAttributes {
        is_verified: true,
        license_status: LicenseStatus::Expiring,
        rating_average: 4.3,
        total_bookings: 160,
        total_revenue: 110_000.0,
        employee_count: 7,
        max_staff: 9,
    }
}
