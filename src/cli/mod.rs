//! Command-line parsing for the admission-chance predictor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the model code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{AdmissionProfile, InputPolicy};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "admit", version, about = "Graduate admission chance predictor (linear regression)")]
pub struct Cli {
    /// How to treat inputs outside the model's domain.
    #[arg(long, global = true, value_enum, env = "ADMIT_POLICY", default_value_t = InputPolicy::Reject)]
    pub policy: InputPolicy,

    /// Emit JSON instead of the text report.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict the admission chance for one profile.
    Predict(PredictArgs),
    /// Print the label for a percentage.
    Classify(ClassifyArgs),
    /// Score every profile in a CSV file.
    Batch(BatchArgs),
    /// Generate synthetic profiles and score them.
    Sample(SampleArgs),
    /// Print the model's accuracy metrics and limitations.
    Metrics,
    /// Describe the model inputs.
    Factors,
    /// Print the coefficient table and label thresholds.
    Coefficients,
}

/// Profile fields; unset fields take the form defaults.
#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Read the profile from a JSON file instead of flags.
    #[arg(long, value_name = "JSON", conflicts_with_all = ["gre", "toefl", "rating", "sop", "lor", "cgpa", "research"])]
    pub profile: Option<PathBuf>,

    /// GRE score (290-340).
    #[arg(long)]
    pub gre: Option<u16>,

    /// TOEFL score (92-120).
    #[arg(long)]
    pub toefl: Option<u16>,

    /// University rating (1-5).
    #[arg(long)]
    pub rating: Option<u8>,

    /// Statement of purpose strength (1-5).
    #[arg(long)]
    pub sop: Option<u8>,

    /// Letter of recommendation strength (1-5).
    #[arg(long)]
    pub lor: Option<u8>,

    /// Cumulative GPA (6.8-9.92).
    #[arg(long)]
    pub cgpa: Option<f64>,

    /// Has research experience.
    #[arg(long)]
    pub research: bool,
}

impl PredictArgs {
    /// Merge the flags over the form defaults.
    pub fn to_profile(&self) -> AdmissionProfile {
        let d = AdmissionProfile::default();
        AdmissionProfile {
            gre: self.gre.unwrap_or(d.gre),
            toefl: self.toefl.unwrap_or(d.toefl),
            university_rating: self.rating.unwrap_or(d.university_rating),
            sop: self.sop.unwrap_or(d.sop),
            lor: self.lor.unwrap_or(d.lor),
            cgpa: self.cgpa.unwrap_or(d.cgpa),
            research: self.research,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ClassifyArgs {
    /// Percentage to classify (0-100).
    #[arg(allow_negative_numbers = true)]
    pub percentage: i64,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// CSV with columns gre,toefl,university_rating,sop,lor,cgpa,research (id optional).
    #[arg(long, short = 'i', value_name = "CSV")]
    pub input: PathBuf,

    /// Write scored rows to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Number of scored rows to print.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Number of profiles to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed (same seed, same profiles).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write scored profiles to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Number of scored rows to print.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}
