//! Admission-chance evaluation.
//!
//! The predictor relies on two primitive operations:
//! - build a design row for a profile (constant term first)
//! - evaluate the clamped linear formula and round it to a percentage
//!
//! `Predictor` wraps those with the coefficient and input checks.

use tracing::debug;

use crate::classify::chance_info;
use crate::domain::{AdmissionProfile, Field, InputPolicy, Percentage, PredictionResult};
use crate::error::PredictError;
use crate::math::{Row, linear_combination};
use crate::models::coefficients::{Coefficients, REGRESSION};

/// Build the design row `[1, gre, toefl, rating, sop, lor, cgpa, research]`.
pub fn design_row(profile: &AdmissionProfile) -> Row {
    let mut row = Row::zeros();
    row[0] = 1.0;
    for (i, field) in Field::ALL.iter().enumerate() {
        row[i + 1] = profile.value_of(*field);
    }
    row
}

/// Unclamped model output (admit probability on a 0..1 scale).
pub fn raw_score(coefficients: &Coefficients, profile: &AdmissionProfile) -> f64 {
    linear_combination(&coefficients.as_vector(), &design_row(profile))
}

/// Predict with the shipped coefficients, rejecting out-of-domain input.
pub fn predict(profile: &AdmissionProfile) -> Result<Percentage, PredictError> {
    Predictor::new(REGRESSION)?.predict(profile)
}

/// A validated coefficient table plus an input policy.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predictor {
    coefficients: Coefficients,
    policy: InputPolicy,
}

impl Predictor {
    /// Build a predictor, failing fast on a malformed table.
    pub fn new(coefficients: Coefficients) -> Result<Self, PredictError> {
        coefficients.validate()?;
        Ok(Self {
            coefficients,
            policy: InputPolicy::default(),
        })
    }

    /// Predictor over the shipped table.
    pub fn standard() -> Result<Self, PredictError> {
        Self::new(REGRESSION)
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Predicted admission chance for a profile.
    pub fn predict(&self, profile: &AdmissionProfile) -> Result<Percentage, PredictError> {
        let profile = profile.checked(self.policy)?;
        let raw = raw_score(&self.coefficients, &profile);
        let percentage = Percentage::from_unit(raw);
        debug!(raw, percentage = percentage.value(), "evaluated admission profile");
        Ok(percentage)
    }

    /// Prediction plus its label and severity.
    pub fn evaluate(&self, profile: &AdmissionProfile) -> Result<PredictionResult, PredictError> {
        let percentage = self.predict(profile)?;
        let info = chance_info(percentage);
        Ok(PredictionResult {
            percentage,
            label: info.label,
            severity: info.severity,
        })
    }
}
