//! Appointment-history ingestion from booking CSV exports.
//!
//! The booking system exports one row per appointment; the importer turns an
//! export into the plain records the churn predictor consumes, tolerating
//! blank timestamps and the status spellings that show up in real exports.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::scoring::churn::AppointmentRecord;

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to open appointment export {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid appointment CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub struct AppointmentHistoryImporter;

impl AppointmentHistoryImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<AppointmentRecord>, HistoryImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| HistoryImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AppointmentRecord>, HistoryImportError> {
        Ok(parser::parse_records(reader)?)
    }
}
