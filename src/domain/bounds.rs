//! Field domains and profile checks.
//!
//! The domains are the ranges of the dataset the coefficients were fitted on.
//! Outside them the linear formula extrapolates and the output is misleading.

use tracing::warn;

use crate::domain::{AdmissionProfile, Field, InputPolicy};
use crate::error::PredictError;

/// Inclusive domain of one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: Field,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const GRE_RANGE: FieldRange = FieldRange { field: Field::Gre, min: 290.0, max: 340.0 };
pub const TOEFL_RANGE: FieldRange = FieldRange { field: Field::Toefl, min: 92.0, max: 120.0 };
pub const RATING_RANGE: FieldRange = FieldRange { field: Field::UniversityRating, min: 1.0, max: 5.0 };
pub const SOP_RANGE: FieldRange = FieldRange { field: Field::Sop, min: 1.0, max: 5.0 };
pub const LOR_RANGE: FieldRange = FieldRange { field: Field::Lor, min: 1.0, max: 5.0 };
pub const CGPA_RANGE: FieldRange = FieldRange { field: Field::Cgpa, min: 6.8, max: 9.92 };

/// Every bounded field, in coefficient order. `research` is a flag and has no range.
pub const FIELD_RANGES: [FieldRange; 6] = [
    GRE_RANGE,
    TOEFL_RANGE,
    RATING_RANGE,
    SOP_RANGE,
    LOR_RANGE,
    CGPA_RANGE,
];

impl AdmissionProfile {
    /// Numeric value of a field (`research` as 1.0 / 0.0).
    pub fn value_of(&self, field: Field) -> f64 {
        match field {
            Field::Gre => f64::from(self.gre),
            Field::Toefl => f64::from(self.toefl),
            Field::UniversityRating => f64::from(self.university_rating),
            Field::Sop => f64::from(self.sop),
            Field::Lor => f64::from(self.lor),
            Field::Cgpa => self.cgpa,
            Field::Research => {
                if self.research {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Check every field against its domain, reporting the first violation.
    pub fn validate(&self) -> Result<(), PredictError> {
        if !self.cgpa.is_finite() {
            return Err(PredictError::NonFinite { field: Field::Cgpa });
        }
        for range in FIELD_RANGES {
            let value = self.value_of(range.field);
            if !range.contains(value) {
                return Err(PredictError::InvalidInput {
                    field: range.field,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Copy of the profile with every field pulled into its domain.
    ///
    /// Fails only for a non-finite CGPA, which has no meaningful nearest bound.
    pub fn clamped(&self) -> Result<AdmissionProfile, PredictError> {
        if !self.cgpa.is_finite() {
            return Err(PredictError::NonFinite { field: Field::Cgpa });
        }
        let out = AdmissionProfile {
            gre: clamp_int(self.gre, GRE_RANGE),
            toefl: clamp_int(self.toefl, TOEFL_RANGE),
            university_rating: clamp_int(self.university_rating, RATING_RANGE),
            sop: clamp_int(self.sop, SOP_RANGE),
            lor: clamp_int(self.lor, LOR_RANGE),
            cgpa: self.cgpa.clamp(CGPA_RANGE.min, CGPA_RANGE.max),
            research: self.research,
        };
        for range in FIELD_RANGES {
            let before = self.value_of(range.field);
            let after = out.value_of(range.field);
            if before != after {
                warn!(field = range.field.key(), before, after, "clamped out-of-domain field");
            }
        }
        Ok(out)
    }

    /// Apply an input policy: validate (`Reject`) or clamp (`Clamp`).
    pub fn checked(&self, policy: InputPolicy) -> Result<AdmissionProfile, PredictError> {
        match policy {
            InputPolicy::Reject => self.validate().map(|()| *self),
            InputPolicy::Clamp => self.clamped(),
        }
    }
}

fn clamp_int<T>(value: T, range: FieldRange) -> T
where
    T: Copy + Ord + TryFrom<u16>,
{
    // Integer bounds are whole numbers, so the casts are exact.
    let (Ok(min), Ok(max)) = (T::try_from(range.min as u16), T::try_from(range.max as u16)) else {
        return value;
    };
    value.clamp(min, max)
}
