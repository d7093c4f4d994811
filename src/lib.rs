//! yamldoctor - YAML configuration diagnostics
//!
//! Checks whether the YAML backend works, whether an application's
//! `agents` and `tasks` config files exist, and what they parse to.
//!
//! # Architecture
//!
//! - **yaml**: backend capability, document model, shape and tips
//! - **doctor**: the four checks and the run report
//! - **report**: banner and ✓/✗ output
//! - **cli**: arguments and TOML configuration

pub mod errors;
pub use errors::{DoctorError, Result};

pub mod cli;
pub mod doctor;
pub mod report;
pub mod yaml;

pub use doctor::{Doctor, RunReport};
pub use report::Reporter;
