//! Shared "predict pipeline" logic used by every command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! input -> domain check (per policy) -> predict -> classify -> summary
//!
//! The command handlers can then focus on presentation (text vs JSON vs CSV).

use std::path::Path;

use tracing::{debug, warn};

use crate::data::{SampleConfig, generate_profiles};
use crate::domain::{AdmissionProfile, PredictionResult, RunConfig};
use crate::error::{AppError, PredictError};
use crate::io::ingest::{IngestedProfiles, ProfileRow, RowError, load_profiles};
use crate::io::profile::PredictionReport;
use crate::models::Predictor;
use crate::report::{BatchSummary, summarize};

/// A profile with its id and prediction.
///
/// `profile` is the one the predictor saw, i.e. after the input policy ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProfile {
    pub id: String,
    pub profile: AdmissionProfile,
    pub result: PredictionResult,
}

/// All computed outputs of a batch or sample run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub scored: Vec<ScoredProfile>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub summary: BatchSummary,
}

/// Build the predictor for a run (shipped coefficients + configured policy).
pub fn predictor_for(config: &RunConfig) -> Result<Predictor, AppError> {
    let predictor = Predictor::standard().map_err(|e| {
        tracing::error!(error = %e, "coefficient table failed validation");
        AppError::from(e)
    })?;
    Ok(predictor.with_policy(config.policy))
}

/// Score a single profile.
pub fn predict_profile(profile: AdmissionProfile, config: &RunConfig) -> Result<PredictionReport, AppError> {
    let predictor = predictor_for(config)?;
    let (profile, result) = evaluate_checked(&predictor, &profile)?;
    debug!(
        percentage = result.percentage.value(),
        label = result.label.display_name(),
        "scored profile"
    );
    Ok(PredictionReport { profile, result })
}

/// Apply the predictor's input policy, then evaluate the resulting profile.
fn evaluate_checked(
    predictor: &Predictor,
    profile: &AdmissionProfile,
) -> Result<(AdmissionProfile, PredictionResult), PredictError> {
    let checked = profile.checked(predictor.policy())?;
    let result = predictor.evaluate(&checked)?;
    Ok((checked, result))
}

/// Score a CSV file of profiles.
pub fn run_batch(path: &Path, config: &RunConfig) -> Result<BatchOutput, AppError> {
    let ingested = load_profiles(path)?;
    score_ingested(ingested, config)
}

/// Score parsed rows; rows failing the domain check become row errors.
pub fn score_ingested(ingested: IngestedProfiles, config: &RunConfig) -> Result<BatchOutput, AppError> {
    let predictor = predictor_for(config)?;
    let IngestedProfiles {
        rows,
        mut row_errors,
        rows_read,
    } = ingested;

    let mut scored = Vec::with_capacity(rows.len());
    for ProfileRow { line, id, profile } in rows {
        match evaluate_checked(&predictor, &profile) {
            Ok((profile, result)) => scored.push(ScoredProfile { id, profile, result }),
            Err(e) if e.is_configuration() => return Err(e.into()),
            Err(e) => {
                warn!(line, id = %id, error = %e, "skipping row");
                row_errors.push(RowError {
                    line,
                    id: Some(id),
                    message: e.to_string(),
                });
            }
        }
    }
    row_errors.sort_by_key(|e| e.line);

    if scored.is_empty() {
        return Err(AppError::new(3, "No valid rows remain after validation."));
    }

    let summary = summarize(&scored);
    Ok(BatchOutput {
        scored,
        row_errors,
        rows_read,
        summary,
    })
}

/// Generate synthetic profiles and score them.
pub fn run_sample(sample: &SampleConfig, config: &RunConfig) -> Result<BatchOutput, AppError> {
    let rows = generate_profiles(sample)?
        .into_iter()
        .enumerate()
        .map(|(i, s)| ProfileRow {
            line: i + 1,
            id: s.id,
            profile: s.profile,
        })
        .collect::<Vec<_>>();
    let ingested = IngestedProfiles {
        rows_read: rows.len(),
        rows,
        row_errors: Vec::new(),
    };
    score_ingested(ingested, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChanceLabel, InputPolicy};
    use crate::io::export::write_results;
    use crate::io::ingest::read_profiles;
    use crate::models::REGRESSION;

    const CSV: &str = "id,gre,toefl,university_rating,sop,lor,cgpa,research\n\
        A,320,110,3,3,3,8.5,0\n\
        B,280,110,3,3,3,8.5,0\n\
        C,x,110,3,3,3,8.5,0\n\
        D,340,120,5,5,5,9.92,1\n";

    #[test]
    fn reject_policy_skips_out_of_domain_rows() {
        let ingested = read_profiles(CSV.as_bytes()).unwrap();
        let out = score_ingested(ingested, &RunConfig::default()).unwrap();
        assert_eq!(out.rows_read, 4);
        assert_eq!(out.scored.len(), 2);
        assert_eq!(out.scored[0].result.percentage.value(), 70);
        assert_eq!(out.scored[1].result.label, ChanceLabel::Excellent);
        let lines: Vec<usize> = out.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4]);
        assert!(out.row_errors[0].message.contains("GRE must be at least 290"));
    }

    #[test]
    fn clamp_policy_keeps_out_of_domain_rows() {
        let ingested = read_profiles(CSV.as_bytes()).unwrap();
        let config = RunConfig {
            policy: InputPolicy::Clamp,
            ..RunConfig::default()
        };
        let out = score_ingested(ingested, &config).unwrap();
        assert_eq!(out.scored.len(), 3);
        // The stored profile is the clamped one the prediction was made from.
        assert_eq!(out.scored[1].profile.gre, 290);
        assert_eq!(out.scored[1].result.percentage.value(), 64);

        let mut buf = Vec::new();
        write_results(&mut buf, &out.scored).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\nB,290,110,3,3,3,8.5,false,64,Good,emerald\n"), "{text}");
        assert!(!text.contains(",280,"));
    }

    #[test]
    fn predictor_carries_configured_policy_and_shipped_table() {
        let config = RunConfig {
            policy: InputPolicy::Clamp,
            ..RunConfig::default()
        };
        let predictor = predictor_for(&config).unwrap();
        assert_eq!(predictor.policy(), InputPolicy::Clamp);
        assert_eq!(predictor.coefficients(), &REGRESSION);
    }

    #[test]
    fn no_valid_rows_is_exit_code_3() {
        let csv = "id,gre,toefl,university_rating,sop,lor,cgpa,research\nA,100,110,3,3,3,8.5,0\n";
        let ingested = read_profiles(csv.as_bytes()).unwrap();
        let err = score_ingested(ingested, &RunConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn predict_profile_rejects_by_default() {
        let profile = AdmissionProfile {
            lor: 6,
            ..AdmissionProfile::default()
        };
        let err = predict_profile(profile, &RunConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("LOR cannot exceed 5"));
    }

    #[test]
    fn sample_run_scores_every_profile() {
        let out = run_sample(&SampleConfig { count: 50, seed: 3 }, &RunConfig::default()).unwrap();
        assert_eq!(out.scored.len(), 50);
        assert!(out.row_errors.is_empty());
        assert_eq!(out.summary.n, 50);
    }
}
