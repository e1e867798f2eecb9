//! Core library for the Salon IQ platform: heuristic scoring of customer
//! churn risk, review trust, and salon compliance/health, plus the service
//! configuration and appointment-history import plumbing.

pub mod config;
pub mod error;
pub mod imports;
pub mod scoring;
pub mod telemetry;
