//! CSV ingest for batch scoring.
//!
//! This module turns a CSV of applicant profiles into typed `AdmissionProfile`s.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level errors** (skip bad rows, but report what happened)
//! - **Separation of concerns**: parsing only; domain checks happen in the pipeline

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{AdmissionProfile, Field};
use crate::error::AppError;

/// A parsed row with its source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub line: usize,
    pub id: String,
    pub profile: AdmissionProfile,
}

/// A row-level error encountered during ingest or scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Ingest output: parsed rows + row errors.
#[derive(Debug, Clone, Default)]
pub struct IngestedProfiles {
    pub rows: Vec<ProfileRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load profiles from a CSV file.
pub fn load_profiles(path: &Path) -> Result<IngestedProfiles, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    read_profiles(file)
}

/// Parse profiles from any CSV source with a header row.
pub fn read_profiles<R: Read>(source: R) -> Result<IngestedProfiles, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut out = IngestedProfiles::default();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        out.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                out.row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let id = get_optional(&record, &header_map, "id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{line}"));

        match parse_row(&record, &header_map) {
            Ok(profile) => out.rows.push(ProfileRow { line, id, profile }),
            Err(message) => out.row_errors.push(RowError {
                line,
                id: Some(id),
                message,
            }),
        }
    }

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may carry a BOM on the first header.
    let name = name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
    match name.as_str() {
        "gre score" | "gre_score" => "gre".to_string(),
        "toefl score" | "toefl_score" => "toefl".to_string(),
        "university rating" | "universityrating" | "rating" => "university_rating".to_string(),
        _ => name.replace(' ', "_"),
    }
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let missing: Vec<&str> = Field::ALL
        .iter()
        .map(|f| f.key())
        .filter(|key| !header_map.contains_key(*key))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::new(
            2,
            format!("Missing required column(s): {}", missing.join(", ")),
        ))
    }
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<AdmissionProfile, String> {
    Ok(AdmissionProfile {
        gre: parse_int(record, header_map, Field::Gre)?,
        toefl: parse_int(record, header_map, Field::Toefl)?,
        university_rating: parse_int(record, header_map, Field::UniversityRating)?,
        sop: parse_int(record, header_map, Field::Sop)?,
        lor: parse_int(record, header_map, Field::Lor)?,
        cgpa: parse_f64(get_required(record, header_map, Field::Cgpa.key())?)
            .ok_or_else(|| "Invalid `cgpa` value.".to_string())?,
        research: parse_bool(get_required(record, header_map, Field::Research.key())?)?,
    })
}

fn parse_int<T>(record: &StringRecord, header_map: &HashMap<String, usize>, field: Field) -> Result<T, String>
where
    T: TryFrom<u64>,
{
    let key = field.key();
    let raw = get_required(record, header_map, key)?;
    let whole = raw
        .parse::<u64>()
        .ok()
        .or_else(|| {
            // Accept `3.0`-style values from spreadsheet exports.
            parse_f64(raw)
                .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
                .map(|v| v as u64)
        })
        .ok_or_else(|| format!("Invalid `{key}` value '{raw}': expected a whole number."))?;
    T::try_from(whole).map_err(|_| format!("`{key}` value {whole} is too large."))
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        _ => Err(format!(
            "Invalid `research` value '{raw}'. Expected one of: 1/0, true/false, yes/no."
        )),
    }
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
