//! Read/write single profiles and results as JSON.
//!
//! A profile file is a flat object with the seven input fields; both
//! `university_rating` and `universityRating` are accepted.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{AdmissionProfile, PredictionResult};
use crate::error::AppError;

/// A profile and its result, as emitted by `admit predict --json`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub profile: AdmissionProfile,
    #[serde(flatten)]
    pub result: PredictionResult,
}

/// Read a profile JSON file.
pub fn read_profile_json(path: &Path) -> Result<AdmissionProfile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open profile JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid profile JSON: {e}")))
}

/// Serialize any report value as pretty JSON to a sink.
pub fn write_json<W: Write, T: Serialize>(mut sink: W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut sink, value)
        .map_err(|e| AppError::new(2, format!("Failed to write JSON: {e}")))?;
    writeln!(sink).map_err(|e| AppError::new(2, format!("Failed to write JSON: {e}")))
}
