//! Reporting utilities: batch summaries and formatted terminal output.

pub mod format;

pub use format::*;

use crate::app::pipeline::ScoredProfile;
use crate::domain::ChanceLabel;

/// Aggregate view of a scored batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub n: usize,
    pub mean_percent: f64,
    pub min_percent: u8,
    pub max_percent: u8,
    /// Count per label, in `ChanceLabel::ALL` order.
    pub label_counts: Vec<(ChanceLabel, usize)>,
}

/// Summarize scored profiles.
pub fn summarize(scored: &[ScoredProfile]) -> BatchSummary {
    let values: Vec<u8> = scored.iter().map(|s| s.result.percentage.value()).collect();
    let n = values.len();
    let mean_percent = if n == 0 {
        0.0
    } else {
        values.iter().map(|v| f64::from(*v)).sum::<f64>() / n as f64
    };
    let label_counts = ChanceLabel::ALL
        .iter()
        .map(|label| (*label, scored.iter().filter(|s| s.result.label == *label).count()))
        .collect();

    BatchSummary {
        n,
        mean_percent,
        min_percent: values.iter().copied().min().unwrap_or(0),
        max_percent: values.iter().copied().max().unwrap_or(0),
        label_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdmissionProfile;
    use crate::models::Predictor;

    fn scored(id: &str, profile: AdmissionProfile) -> ScoredProfile {
        ScoredProfile {
            id: id.to_string(),
            profile,
            result: Predictor::standard().unwrap().evaluate(&profile).unwrap(),
        }
    }

    #[test]
    fn summarize_basic() {
        let base = AdmissionProfile::default();
        let rows = vec![
            scored("A", base),
            scored("B", AdmissionProfile { research: true, ..base }),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.n, 2);
        assert_eq!(summary.min_percent, 70);
        assert_eq!(summary.max_percent, 72);
        assert!((summary.mean_percent - 71.0).abs() < 1e-12);
        assert_eq!(summary.label_counts[1], (ChanceLabel::Good, 2));
        assert_eq!(summary.label_counts[0], (ChanceLabel::Excellent, 0));
    }

    #[test]
    fn summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.n, 0);
        assert_eq!(summary.mean_percent, 0.0);
    }
}
