//! Export scored profiles to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::app::pipeline::ScoredProfile;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    gre: u16,
    toefl: u16,
    university_rating: u8,
    sop: u8,
    lor: u8,
    cgpa: f64,
    research: bool,
    chance_percent: u8,
    label: &'static str,
    severity: &'static str,
}

/// Write scored profiles to a CSV file.
pub fn write_results_csv(path: &Path, scored: &[ScoredProfile]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(file, scored)
}

/// Write scored profiles as CSV to any sink.
pub fn write_results<W: Write>(sink: W, scored: &[ScoredProfile]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(sink);
    for s in scored {
        let p = &s.profile;
        writer
            .serialize(ExportRow {
                id: &s.id,
                gre: p.gre,
                toefl: p.toefl,
                university_rating: p.university_rating,
                sop: p.sop,
                lor: p.lor,
                cgpa: p.cgpa,
                research: p.research,
                chance_percent: s.result.percentage.value(),
                label: s.result.label.display_name(),
                severity: s.result.severity.tag(),
            })
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
