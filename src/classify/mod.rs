//! Percentage → qualitative chance label.
//!
//! Thresholds are inclusive lower bounds, checked highest first:
//!
//! | range    | label    | severity |
//! |----------|----------|----------|
//! | 80..=100 | Excellent| green    |
//! | 60..=79  | Good     | emerald  |
//! | 40..=59  | Moderate | yellow   |
//! | 20..=39  | Low      | orange   |
//! | 0..=19   | Very Low | red      |

use crate::domain::{ChanceInfo, ChanceLabel, Percentage, Severity};
use crate::error::PredictError;

/// `(lower bound, label, severity)`, highest first.
pub const THRESHOLDS: [(u8, ChanceLabel, Severity); 5] = [
    (80, ChanceLabel::Excellent, Severity::Green),
    (60, ChanceLabel::Good, Severity::Emerald),
    (40, ChanceLabel::Moderate, Severity::Yellow),
    (20, ChanceLabel::Low, Severity::Orange),
    (0, ChanceLabel::VeryLow, Severity::Red),
];

/// Label and severity for a percentage. Total over `0..=100`.
pub fn chance_info(percentage: Percentage) -> ChanceInfo {
    let value = percentage.value();
    let (_, label, severity) = THRESHOLDS
        .iter()
        .copied()
        .find(|(min, _, _)| value >= *min)
        .unwrap_or((0, ChanceLabel::VeryLow, Severity::Red));
    ChanceInfo { label, severity }
}

/// Label for a percentage.
pub fn classify(percentage: Percentage) -> ChanceLabel {
    chance_info(percentage).label
}

/// Label for a raw integer, rejecting values outside `0..=100`.
pub fn classify_value(value: i64) -> Result<ChanceLabel, PredictError> {
    Percentage::new(value).map(classify)
}

impl ChanceLabel {
    /// Severity tag shown with this label.
    pub fn severity(self) -> Severity {
        THRESHOLDS
            .iter()
            .find(|(_, label, _)| *label == self)
            .map(|(_, _, severity)| *severity)
            .unwrap_or(Severity::Red)
    }

    /// Inclusive percentage range covered by this label.
    pub fn range(self) -> (u8, u8) {
        let mut upper = 100;
        for (min, label, _) in THRESHOLDS {
            if label == self {
                return (min, upper);
            }
            upper = min.saturating_sub(1);
        }
        (0, 0)
    }
}
