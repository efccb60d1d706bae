//! Mathematical utilities: fixed-size linear evaluation.

pub mod linear;

pub use linear::*;
