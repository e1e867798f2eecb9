mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use salon_iq::error::AppError;

pub use infra::{build_engines, ScoringEngines};
pub use routes::scoring_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
