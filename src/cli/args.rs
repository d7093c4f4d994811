//! Command-line argument parsing for yamldoctor
//!
//! Every flag is optional; running with none checks the default files
//! relative to the current directory.

use clap::Parser;
use std::path::PathBuf;

/// yamldoctor - Find out why your YAML configuration does not load
#[derive(Parser, Debug)]
#[command(name = "yamldoctor")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Check the YAML backend and the agents/tasks config files", long_about = None)]
pub struct Args {
    /// Directory the config paths are resolved against (current directory by default)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log verbosity on stderr: -v (debug), -vv (trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }

    /// Get working directory as an absolute path (current dir if not specified)
    pub fn working_dir(&self) -> PathBuf {
        let dir = self.root.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });
        std::path::absolute(&dir).unwrap_or(dir)
    }
}

impl Verbosity {
    /// Maximum level for the stderr log subscriber
    pub fn log_level(&self) -> tracing::Level {
        match self {
            Verbosity::Normal => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::VeryVerbose => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["yamldoctor"]).unwrap();
        assert!(args.root.is_none());
        assert!(args.config.is_none());
        assert!(!args.no_color);
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::try_parse_from(["yamldoctor", "-v"]).unwrap();
        assert_eq!(args.verbosity(), Verbosity::Verbose);
        assert_eq!(args.verbosity().log_level(), tracing::Level::DEBUG);

        let args = Args::try_parse_from(["yamldoctor", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);
        assert_eq!(args.verbosity().log_level(), tracing::Level::TRACE);

        assert_eq!(Verbosity::Normal.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_root_and_config_flags() {
        let args = Args::try_parse_from([
            "yamldoctor",
            "-C",
            "/srv/app",
            "--config",
            "doctor.toml",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(args.working_dir(), PathBuf::from("/srv/app"));
        assert_eq!(args.config, Some(PathBuf::from("doctor.toml")));
        assert!(args.no_color);
    }

    #[test]
    fn test_working_dir_defaults_to_absolute_cwd() {
        let args = Args::try_parse_from(["yamldoctor"]).unwrap();
        assert!(args.working_dir().is_absolute());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["yamldoctor", "extra"]).is_err());
    }
}
