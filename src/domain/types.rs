//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` where possible and
//! serializable so they can be:
//!
//! - built from CLI flags or JSON/CSV inputs
//! - passed through the predictor without allocation
//! - exported back to JSON/CSV alongside the computed chance

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One applicant's academic profile.
///
/// Field domains are listed in `domain::bounds`. A profile built by hand may be
/// out of domain; `Predictor` checks it according to its `InputPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdmissionProfile {
    pub gre: u16,
    pub toefl: u16,
    #[serde(alias = "universityRating", alias = "rating")]
    pub university_rating: u8,
    pub sop: u8,
    pub lor: u8,
    pub cgpa: f64,
    pub research: bool,
}

impl Default for AdmissionProfile {
    /// The form's pre-filled values.
    fn default() -> Self {
        Self {
            gre: 320,
            toefl: 110,
            university_rating: 3,
            sop: 3,
            lor: 3,
            cgpa: 8.5,
            research: false,
        }
    }
}

/// A weighted input field, in coefficient order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Gre,
    Toefl,
    UniversityRating,
    Sop,
    Lor,
    Cgpa,
    Research,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Gre,
        Field::Toefl,
        Field::UniversityRating,
        Field::Sop,
        Field::Lor,
        Field::Cgpa,
        Field::Research,
    ];

    /// Column / JSON key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Gre => "gre",
            Field::Toefl => "toefl",
            Field::UniversityRating => "university_rating",
            Field::Sop => "sop",
            Field::Lor => "lor",
            Field::Cgpa => "cgpa",
            Field::Research => "research",
        }
    }

    /// Label used in validation messages.
    pub fn short_name(self) -> &'static str {
        match self {
            Field::Gre => "GRE",
            Field::Toefl => "TOEFL",
            Field::UniversityRating => "University rating",
            Field::Sop => "SOP",
            Field::Lor => "LOR",
            Field::Cgpa => "CGPA",
            Field::Research => "Research",
        }
    }

    /// Human-readable label for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Field::Gre => "GRE Score",
            Field::Toefl => "TOEFL Score",
            Field::UniversityRating => "University Rating",
            Field::Sop => "Statement of Purpose",
            Field::Lor => "Letter of Recommendation",
            Field::Cgpa => "CGPA",
            Field::Research => "Research Experience",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// What to do with a profile whose fields fall outside their domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Return `PredictError::InvalidInput` for the first out-of-domain field.
    #[default]
    Reject,
    /// Pull out-of-domain values to the nearest bound.
    ///
    /// Non-finite CGPA values are still rejected.
    Clamp,
}

/// Inverse resolution of the grid scaled outputs are snapped to before rounding.
const SNAP_GRID: f64 = 1e9;

/// An integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: Percentage = Percentage(0);
    pub const MAX: Percentage = Percentage(100);

    /// Build a percentage, rejecting anything outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, crate::error::PredictError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(crate::error::PredictError::PercentageOutOfRange { value }),
        }
    }

    /// Convert a model output in `[0, 1]` to a percentage.
    ///
    /// The input is clamped to `[0, 1]` first, then scaled and rounded half up.
    /// The scaled value is snapped to a 1e-9 grid before rounding, so an exact
    /// `.5` rounds up whatever the summation order left in the last bits.
    /// Callers must not pass NaN.
    pub(crate) fn from_unit(raw: f64) -> Self {
        let scaled = raw.clamp(0.0, 1.0) * 100.0;
        let snapped = (scaled * SNAP_GRID).round() / SNAP_GRID;
        Self(snapped.round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Percentage {
    type Error = crate::error::PredictError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Qualitative bucket for a predicted percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChanceLabel {
    Excellent,
    Good,
    Moderate,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl ChanceLabel {
    pub const ALL: [ChanceLabel; 5] = [
        ChanceLabel::Excellent,
        ChanceLabel::Good,
        ChanceLabel::Moderate,
        ChanceLabel::Low,
        ChanceLabel::VeryLow,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ChanceLabel::Excellent => "Excellent",
            ChanceLabel::Good => "Good",
            ChanceLabel::Moderate => "Moderate",
            ChanceLabel::Low => "Low",
            ChanceLabel::VeryLow => "Very Low",
        }
    }
}

impl std::fmt::Display for ChanceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Presentation severity attached to a `ChanceLabel`.
///
/// Not part of the computational contract; front-ends map it to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Emerald,
    Yellow,
    Orange,
    Red,
}

impl Severity {
    /// Short tag (`green`, `emerald`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Emerald => "emerald",
            Severity::Yellow => "yellow",
            Severity::Orange => "orange",
            Severity::Red => "red",
        }
    }

    /// Text colour class used by the web front-end.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Green => "text-green-600",
            Severity::Emerald => "text-emerald-600",
            Severity::Yellow => "text-yellow-600",
            Severity::Orange => "text-orange-600",
            Severity::Red => "text-red-600",
        }
    }
}

/// Label plus severity, as returned by `classify::chance_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceInfo {
    pub label: ChanceLabel,
    pub severity: Severity,
}

/// Output of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub percentage: Percentage,
    pub label: ChanceLabel,
    pub severity: Severity,
}

/// Training-time quality figures, exposed read-only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Mean absolute error on the admit probability (0..1 scale).
    pub mae: f64,
    pub r2: f64,
    #[serde(rename = "accuracyPercent")]
    pub accuracy_percent: u8,
}

impl ModelMetrics {
    /// MAE expressed in percentage points (e.g. `4.3`).
    pub fn mae_percent(&self) -> f64 {
        self.mae * 100.0
    }
}

/// Relative influence of a factor, as described to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Influence {
    High,
    Medium,
    Low,
}

impl Influence {
    pub fn display_name(self) -> &'static str {
        match self {
            Influence::High => "High",
            Influence::Medium => "Medium",
            Influence::Low => "Low",
        }
    }
}

/// A described model input (display only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub field: Field,
    pub influence: Influence,
    pub description: &'static str,
}

/// A run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus env defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub policy: InputPolicy,
    /// Emit JSON instead of the text report.
    pub json: bool,
}
