//! Command-line surface: flags from clap and the optional TOML file
//! that picks the checked paths and report limits.

pub mod args;
pub mod config;

pub use args::{Args, Verbosity};
pub use config::{Config, FilesConfig, ReportConfig};
