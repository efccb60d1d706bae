//! Input data sources.
//!
//! - seeded synthetic applicant profiles (`sample`)

pub mod sample;

pub use sample::*;
