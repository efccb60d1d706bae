use thiserror::Error;

use crate::domain::Field;

/// Errors raised by the prediction core.
///
/// `InvalidInput` and `NonFinite` describe a bad profile and are recoverable by
/// the caller (fix the input and retry). `Configuration` and `WeightCount`
/// describe a broken coefficient table and are fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("{}", invalid_input_message(.field, .value, .min, .max))]
    InvalidInput {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: Field },

    #[error("coefficient table has a non-finite weight for '{name}': {value}")]
    Configuration { name: &'static str, value: f64 },

    #[error("coefficient table needs {expected} weights (intercept first), found {found}")]
    WeightCount { expected: usize, found: usize },

    #[error("percentage {value} is outside 0..=100")]
    PercentageOutOfRange { value: i64 },
}

impl PredictError {
    /// True for errors caused by a broken coefficient table rather than by input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::WeightCount { .. })
    }
}

fn invalid_input_message(field: &Field, value: &f64, min: &f64, max: &f64) -> String {
    let name = field.short_name();
    if value < min {
        format!("{name} must be at least {min} (got {value})")
    } else if value > max {
        format!("{name} cannot exceed {max} (got {value})")
    } else {
        format!("{name} is outside {min}..={max} (got {value})")
    }
}

/// Binary-level error: a message plus the process exit code to report.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        let exit_code = if err.is_configuration() { 4 } else { 2 };
        Self::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
