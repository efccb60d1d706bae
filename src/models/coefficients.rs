//! The fixed coefficient table of the admission regression.
//!
//! Fitted offline on the UCLA graduate admissions dataset:
//!
//! ```text
//! chance = β0 + β1·GRE + β2·TOEFL + β3·Rating + β4·SOP + β5·LOR + β6·CGPA + β7·Research
//! ```
//!
//! The table is process-wide constant configuration. Replacing it means shipping
//! a new constant, there is no runtime reload.

use serde::Serialize;

use crate::domain::{Field, ModelMetrics};
use crate::error::PredictError;
use crate::math::{ROW_LEN, Row, first_non_finite};

/// Intercept plus one weight per `Field`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub intercept: f64,
    pub gre: f64,
    pub toefl: f64,
    pub university_rating: f64,
    pub sop: f64,
    pub lor: f64,
    pub cgpa: f64,
    pub research: f64,
}

/// Coefficients of the shipped model.
pub const REGRESSION: Coefficients = Coefficients {
    intercept: -1.2757,
    gre: 0.0018,
    toefl: 0.0029,
    university_rating: 0.0059,
    sop: 0.0016,
    lor: 0.0169,
    cgpa: 0.1183,
    research: 0.0243,
};

/// Hold-out metrics of the shipped model.
pub const MODEL_METRICS: ModelMetrics = ModelMetrics {
    mae: 0.043,
    r2: 0.82,
    accuracy_percent: 82,
};

/// Names of the vector entries, intercept first.
pub const TERM_NAMES: [&str; ROW_LEN] = [
    "intercept",
    "gre",
    "toefl",
    "university_rating",
    "sop",
    "lor",
    "cgpa",
    "research",
];

impl Coefficients {
    /// Build a table from `[intercept, gre, toefl, rating, sop, lor, cgpa, research]`.
    pub fn from_slice(values: &[f64]) -> Result<Self, PredictError> {
        let [intercept, gre, toefl, university_rating, sop, lor, cgpa, research] = values else {
            return Err(PredictError::WeightCount {
                expected: ROW_LEN,
                found: values.len(),
            });
        };
        let table = Self {
            intercept: *intercept,
            gre: *gre,
            toefl: *toefl,
            university_rating: *university_rating,
            sop: *sop,
            lor: *lor,
            cgpa: *cgpa,
            research: *research,
        };
        table.validate()?;
        Ok(table)
    }

    /// Entries in row order, intercept first.
    pub fn as_array(&self) -> [f64; ROW_LEN] {
        [
            self.intercept,
            self.gre,
            self.toefl,
            self.university_rating,
            self.sop,
            self.lor,
            self.cgpa,
            self.research,
        ]
    }

    pub fn as_vector(&self) -> Row {
        Row::from(self.as_array())
    }

    /// Weight attached to a feature.
    pub fn weight(&self, field: Field) -> f64 {
        match field {
            Field::Gre => self.gre,
            Field::Toefl => self.toefl,
            Field::UniversityRating => self.university_rating,
            Field::Sop => self.sop,
            Field::Lor => self.lor,
            Field::Cgpa => self.cgpa,
            Field::Research => self.research,
        }
    }

    /// Fail if any entry is NaN or infinite.
    pub fn validate(&self) -> Result<(), PredictError> {
        let values = self.as_array();
        match first_non_finite(&values) {
            None => Ok(()),
            Some(idx) => Err(PredictError::Configuration {
                name: TERM_NAMES.get(idx).copied().unwrap_or("?"),
                value: values.get(idx).copied().unwrap_or(f64::NAN),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_is_valid_and_non_negative() {
        REGRESSION.validate().unwrap();
        for field in Field::ALL {
            assert!(REGRESSION.weight(field) >= 0.0, "{field} weight is negative");
        }
    }

    #[test]
    fn validate_names_the_bad_term() {
        let table = Coefficients {
            lor: f64::NAN,
            ..REGRESSION
        };
        match table.validate() {
            Err(PredictError::Configuration { name, value }) => {
                assert_eq!(name, "lor");
                assert!(value.is_nan());
            }
            other => panic!("expected Configuration, got {other:?}"),
        }

        let table = Coefficients {
            intercept: f64::INFINITY,
            ..REGRESSION
        };
        assert!(table.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn from_slice_requires_all_weights() {
        let err = Coefficients::from_slice(&[-1.0, 0.1, 0.2]).unwrap_err();
        assert_eq!(err, PredictError::WeightCount { expected: 8, found: 3 });

        let table = Coefficients::from_slice(&REGRESSION.as_array()).unwrap();
        assert_eq!(table, REGRESSION);
    }

    #[test]
    fn metrics_display_values() {
        assert!((MODEL_METRICS.mae_percent() - 4.3).abs() < 1e-9);
        assert_eq!(MODEL_METRICS.accuracy_percent, 82);
    }

    #[test]
    fn metrics_json_keys() {
        let value = serde_json::to_value(MODEL_METRICS).unwrap();
        assert_eq!(value["accuracyPercent"], 82);
        assert_eq!(value["r2"], 0.82);
        assert!(value.get("accuracy_percent").is_none());
    }
}
