//! Validation tests module.
//!
//! One file per validator operation, plus the composed server-side pipelines.

pub mod read_only;
pub mod required;
pub mod server_side;
