//! User-facing description of the model inputs.

use crate::domain::{Factor, Field, Influence};

/// The seven inputs with their described influence, in report order.
pub const FACTORS: [Factor; 7] = [
    Factor {
        field: Field::Gre,
        influence: Influence::Medium,
        description: "Graduate Record Examination - standardized test for graduate admissions",
    },
    Factor {
        field: Field::Toefl,
        influence: Influence::Medium,
        description: "Test of English as a Foreign Language - measures English proficiency",
    },
    Factor {
        field: Field::Cgpa,
        influence: Influence::High,
        description: "Cumulative Grade Point Average - your undergraduate academic performance",
    },
    Factor {
        field: Field::UniversityRating,
        influence: Influence::Low,
        description: "Reputation/ranking of your target university (1-5 scale)",
    },
    Factor {
        field: Field::Sop,
        influence: Influence::Low,
        description: "Quality of your written statement explaining goals and motivation",
    },
    Factor {
        field: Field::Lor,
        influence: Influence::Medium,
        description: "Strength of recommendations from professors or employers",
    },
    Factor {
        field: Field::Research,
        influence: Influence::Medium,
        description: "Whether you have prior research experience in your field",
    },
];

/// Known limitations, shown next to the metrics.
pub const LIMITATIONS: [&str; 5] = [
    "This model uses historical data and may not reflect current admission trends",
    "Essays, interviews, and personal statements are not quantifiable in this model",
    "Different universities and programs have varying requirements",
    "Research quality and publications are not captured, only presence/absence",
    "This prediction should be one of many factors in your decision-making",
];
