//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - builds the run configuration
//! - runs the predict / batch / sample pipelines
//! - prints reports and writes optional exports

use std::io::stdout;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{BatchArgs, ClassifyArgs, Cli, Command, PredictArgs, SampleArgs};
use crate::classify::classify_value;
use crate::data::SampleConfig;
use crate::domain::{ChanceLabel, Percentage, RunConfig, Severity};
use crate::error::AppError;
use crate::io::{read_profile_json, write_json, write_results_csv};
use crate::models::{FACTORS, MODEL_METRICS};

pub mod pipeline;

/// Entry point for the `admit` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may set ADMIT_POLICY / ADMIT_LOG; a missing file is fine.
    dotenvy::dotenv().ok();
    crate::logging::init_tracing();

    let cli = Cli::parse();
    let config = run_config_from_cli(&cli);

    match cli.command {
        Command::Predict(args) => handle_predict(&args, &config),
        Command::Classify(args) => handle_classify(&args, &config),
        Command::Batch(args) => handle_batch(&args, &config),
        Command::Sample(args) => handle_sample(&args, &config),
        Command::Metrics => handle_metrics(&config),
        Command::Factors => handle_factors(&config),
        Command::Coefficients => handle_coefficients(&config),
    }
}

pub fn run_config_from_cli(cli: &Cli) -> RunConfig {
    RunConfig {
        policy: cli.policy,
        json: cli.json,
    }
}

fn handle_predict(args: &PredictArgs, config: &RunConfig) -> Result<(), AppError> {
    let profile = match &args.profile {
        Some(path) => read_profile_json(path)?,
        None => args.to_profile(),
    };
    let report = pipeline::predict_profile(profile, config)?;

    if config.json {
        write_json(stdout(), &report)
    } else {
        println!("{}", crate::report::format_prediction(&report, &MODEL_METRICS));
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    percentage: Percentage,
    label: ChanceLabel,
    severity: Severity,
}

fn handle_classify(args: &ClassifyArgs, config: &RunConfig) -> Result<(), AppError> {
    let label = classify_value(args.percentage)?;
    if config.json {
        write_json(
            stdout(),
            &ClassifyOutput {
                percentage: Percentage::new(args.percentage)?,
                label,
                severity: label.severity(),
            },
        )
    } else {
        println!("{label} ({})", label.severity().tag());
        Ok(())
    }
}

fn handle_batch(args: &BatchArgs, config: &RunConfig) -> Result<(), AppError> {
    let output = pipeline::run_batch(&args.input, config)?;
    info!(
        rows = output.rows_read,
        scored = output.summary.n,
        skipped = output.row_errors.len(),
        "batch scored"
    );
    print_batch(&output, args.top, config)?;

    if let Some(path) = &args.export {
        write_results_csv(path, &output.scored)?;
    }
    Ok(())
}

fn handle_sample(args: &SampleArgs, config: &RunConfig) -> Result<(), AppError> {
    let sample = SampleConfig {
        count: args.count,
        seed: args.seed,
    };
    let output = pipeline::run_sample(&sample, config)?;
    print_batch(&output, args.top, config)?;

    if let Some(path) = &args.export {
        write_results_csv(path, &output.scored)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct BatchJson<'a> {
    rows_read: usize,
    scored: usize,
    skipped: usize,
    mean_percent: f64,
    label_counts: Vec<(ChanceLabel, usize)>,
    errors: Vec<RowErrorJson<'a>>,
}

#[derive(Debug, Serialize)]
struct RowErrorJson<'a> {
    line: usize,
    id: Option<&'a str>,
    message: &'a str,
}

fn print_batch(output: &pipeline::BatchOutput, top: usize, config: &RunConfig) -> Result<(), AppError> {
    if config.json {
        let body = BatchJson {
            rows_read: output.rows_read,
            scored: output.summary.n,
            skipped: output.row_errors.len(),
            mean_percent: output.summary.mean_percent,
            label_counts: output.summary.label_counts.clone(),
            errors: output
                .row_errors
                .iter()
                .map(|e| RowErrorJson {
                    line: e.line,
                    id: e.id.as_deref(),
                    message: &e.message,
                })
                .collect(),
        };
        write_json(stdout(), &body)
    } else {
        println!("{}", crate::report::format_batch(output, top));
        Ok(())
    }
}

fn handle_metrics(config: &RunConfig) -> Result<(), AppError> {
    if config.json {
        write_json(stdout(), &MODEL_METRICS)
    } else {
        println!("{}", crate::report::format_metrics(&MODEL_METRICS));
        Ok(())
    }
}

fn handle_factors(config: &RunConfig) -> Result<(), AppError> {
    if config.json {
        write_json(stdout(), &FACTORS)
    } else {
        println!("{}", crate::report::format_factors());
        Ok(())
    }
}

fn handle_coefficients(config: &RunConfig) -> Result<(), AppError> {
    let predictor = pipeline::predictor_for(config)?;
    if config.json {
        write_json(stdout(), predictor.coefficients())
    } else {
        println!("{}", crate::report::format_coefficients(predictor.coefficients()));
        Ok(())
    }
}
