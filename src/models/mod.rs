//! The admission regression: coefficient table, evaluation, and display metadata.
//!
//! Evaluation is a small, pure function so that the CLI, batch scoring and
//! tests all share one code path.

pub mod coefficients;
pub mod factors;
pub mod model;

pub use coefficients::*;
pub use factors::*;
pub use model::*;
