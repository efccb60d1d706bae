//! Input/output helpers.
//!
//! - CSV ingest of profiles for batch scoring (`ingest`)
//! - scored results export to CSV (`export`)
//! - profile / result JSON (`profile`)

pub mod export;
pub mod ingest;
pub mod profile;

pub use export::*;
pub use ingest::*;
pub use profile::*;
