//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input record (`AdmissionProfile`) and its field domains (`bounds`)
//! - prediction outputs (`Percentage`, `ChanceLabel`, `PredictionResult`, ...)
//! - display-only model metadata (`ModelMetrics`, `Factor`)

pub mod bounds;
pub mod types;

pub use bounds::*;
pub use types::*;
