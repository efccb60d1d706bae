//! `admit-chance` library crate.
//!
//! The binary (`admit`) is a thin wrapper around this library so that:
//!
//! - the predictor and classifier are testable without spawning processes
//! - other front-ends (web form, notebooks) can call the same core
//!
//! Quick use:
//!
//! ```
//! use admit_chance::classify::classify;
//! use admit_chance::domain::{AdmissionProfile, ChanceLabel};
//! use admit_chance::models::predict;
//!
//! let chance = predict(&AdmissionProfile::default())?;
//! assert_eq!(chance.value(), 70);
//! assert_eq!(classify(chance), ChanceLabel::Good);
//! # Ok::<(), admit_chance::error::PredictError>(())
//! ```

pub mod app;
pub mod classify;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
