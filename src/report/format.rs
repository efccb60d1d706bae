//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::{BatchOutput, ScoredProfile};
use crate::classify::THRESHOLDS;
use crate::domain::{AdmissionProfile, Field, ModelMetrics};
use crate::io::profile::PredictionReport;
use crate::models::{Coefficients, FACTORS, LIMITATIONS, TERM_NAMES};

/// Format a single prediction with its inputs.
pub fn format_prediction(report: &PredictionReport, metrics: &ModelMetrics) -> String {
    let mut out = String::new();

    out.push_str("=== admit - Admission Chance ===\n");
    out.push_str(&format_profile(&report.profile));
    out.push('\n');
    out.push_str(&format!(
        "Chance of admission: {}\n",
        report.result.percentage
    ));
    out.push_str(&format!("{} Chance\n", report.result.label));
    out.push_str(&format!("{}\n", bar(report.result.percentage.value(), 40)));
    out.push('\n');
    out.push_str(&format_metrics_line(metrics));

    out
}

fn format_profile(p: &AdmissionProfile) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let value = match field {
            Field::Cgpa => format!("{:.2}", p.cgpa),
            Field::Research => (if p.research { "yes" } else { "no" }).to_string(),
            other => format!("{}", p.value_of(other)),
        };
        out.push_str(&format!("{:<26} {value}\n", field.display_name()));
    }
    out
}

/// Two-line accuracy note shown under results.
pub fn format_metrics_line(metrics: &ModelMetrics) -> String {
    format!(
        "Model Accuracy: {}% (R² = {})\nMean Absolute Error: ±{:.1}%\n",
        metrics.accuracy_percent,
        metrics.r2,
        metrics.mae_percent()
    )
}

/// Metrics plus known limitations.
pub fn format_metrics(metrics: &ModelMetrics) -> String {
    let mut out = String::new();
    out.push_str("Model metrics:\n");
    out.push_str(&format!("- accuracy : {}%\n", metrics.accuracy_percent));
    out.push_str(&format!("- R²       : {}\n", metrics.r2));
    out.push_str(&format!("- MAE      : {} (±{:.1}%)\n", metrics.mae, metrics.mae_percent()));
    out.push_str("\nLimitations:\n");
    for item in LIMITATIONS {
        out.push_str(&format!("- {item}\n"));
    }
    out
}

/// Factor catalogue table.
pub fn format_factors() -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<26} {:<8} {}\n", "factor", "weight", "description"));
    out.push_str(&format!("{:-<26} {:-<8} {:-<11}\n", "", "", ""));
    for f in FACTORS {
        out.push_str(&format!(
            "{:<26} {:<8} {}\n",
            f.field.display_name(),
            f.influence.display_name(),
            f.description
        ));
    }
    out
}

/// Coefficient table plus the label thresholds.
pub fn format_coefficients(coefficients: &Coefficients) -> String {
    let mut out = String::new();
    out.push_str("Prediction = β0 + β1(GRE) + β2(TOEFL) + β3(Rating) + β4(SOP) + β5(LOR) + β6(CGPA) + β7(Research)\n\n");
    for (name, value) in TERM_NAMES.iter().zip(coefficients.as_array()) {
        out.push_str(&format!("{name:<18} {value:>9.4}\n"));
    }
    out.push_str("\nLabels:\n");
    for (_, label, severity) in THRESHOLDS {
        let (lo, hi) = label.range();
        out.push_str(&format!("{lo:>3}..={hi:<3} {:<9} ({})\n", label.display_name(), severity.tag()));
    }
    out
}

/// Batch summary + per-row table + row errors.
pub fn format_batch(output: &BatchOutput, show_rows: usize) -> String {
    let mut out = String::new();
    let s = &output.summary;

    out.push_str(&format!(
        "Rows: read={} scored={} skipped={}\n",
        output.rows_read,
        s.n,
        output.row_errors.len()
    ));
    out.push_str(&format!(
        "Chance: mean={:.1}% min={}% max={}%\n",
        s.mean_percent, s.min_percent, s.max_percent
    ));
    for (label, count) in &s.label_counts {
        out.push_str(&format!("  {:<9} {count}\n", label.display_name()));
    }

    if show_rows > 0 {
        out.push('\n');
        out.push_str(&format_table(&output.scored[..show_rows.min(output.scored.len())]));
    }

    if !output.row_errors.is_empty() {
        out.push_str("\nSkipped rows:\n");
        for e in &output.row_errors {
            let id = e.id.as_deref().unwrap_or("-");
            out.push_str(&format!("  line {:<5} {:<12} {}\n", e.line, truncate(id, 12), e.message));
        }
    }

    out
}

fn format_table(rows: &[ScoredProfile]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<12} {:>4} {:>5} {:>6} {:>4} {:>4} {:>5} {:>8} {:>6} {:<9}\n",
            "id", "gre", "toefl", "rating", "sop", "lor", "cgpa", "research", "chance", "label"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<12} {:-<4} {:-<5} {:-<6} {:-<4} {:-<4} {:-<5} {:-<8} {:-<6} {:-<9}\n",
            "", "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in rows {
        let p = &r.profile;
        out.push_str(
            format!(
                "{:<12} {:>4} {:>5} {:>6} {:>4} {:>4} {:>5.2} {:>8} {:>6} {:<9}\n",
                truncate(&r.id, 12),
                p.gre,
                p.toefl,
                p.university_rating,
                p.sop,
                p.lor,
                p.cgpa,
                if p.research { "yes" } else { "no" },
                r.result.percentage.to_string(),
                r.result.label.display_name(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled.min(width)))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MODEL_METRICS, Predictor, REGRESSION};

    #[test]
    fn prediction_report_mentions_label_and_metrics() {
        let profile = AdmissionProfile::default();
        let report = PredictionReport {
            profile,
            result: Predictor::standard().unwrap().evaluate(&profile).unwrap(),
        };
        let text = format_prediction(&report, &MODEL_METRICS);
        assert!(text.contains("Chance of admission: 70%"));
        assert!(text.contains("Good Chance"));
        assert!(text.contains("Model Accuracy: 82% (R² = 0.82)"));
        assert!(text.contains("Mean Absolute Error: ±4.3%"));
        assert!(text.contains("Research Experience        no"));
    }

    #[test]
    fn coefficient_table_lists_every_term() {
        let text = format_coefficients(&REGRESSION);
        assert!(text.contains("intercept            -1.2757"));
        assert!(text.contains("cgpa                  0.1183"));
        assert!(text.contains(" 80..=100 Excellent (green)"));
        assert!(text.contains("  0..=19  Very Low  (red)"));
    }

    #[test]
    fn factor_table_has_every_factor() {
        let text = format_factors();
        assert_eq!(text.lines().count(), 2 + FACTORS.len());
        assert!(text.contains("CGPA                       High"));
    }

    #[test]
    fn bar_is_fixed_width() {
        assert_eq!(bar(0, 10), "[..........]");
        assert_eq!(bar(100, 10), "[##########]");
        assert_eq!(bar(70, 10), "[#######...]");
    }

    #[test]
    fn truncate_long_ids() {
        assert_eq!(truncate("abc", 12), "abc");
        assert_eq!(truncate("abcdefghijklmnop", 5), "abcd.");
    }
}
