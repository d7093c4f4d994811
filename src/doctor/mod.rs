//! Doctor command for YAML configuration diagnostics
//!
//! Runs four checks in a fixed order and reports each under its own
//! banner:
//!
//! 1. capability: is the YAML backend compiled in and working
//! 2. files: do the agents/tasks files exist, and what do they start with
//! 3. parsing: what structure does each existing file parse to
//! 4. simulation: replay the application's own load of both files
//!
//! Checks 3 and 4 need a [`Backend`] and are skipped without one. Errors
//! never leave the check they happen in; they become report lines.

pub mod bundle;
pub mod capability;
pub mod files;
pub mod parsing;
pub mod simulation;

pub use bundle::{ConfigBundle, ConfigKind};
pub use files::{existing_paths, FileRecord, FileStatus, Preview};
pub use parsing::{ParseOutcome, ParseResult};
pub use simulation::{Assignment, LoadOutcome, SimulationReport};

use crate::cli::Config;
use crate::errors::{DoctorError, Result};
use crate::report::Reporter;
use crate::yaml::{Backend, Capability, Document};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Everything one run observed
///
/// There is no pass/fail verdict; the caller reads the report.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub capability: Capability,
    pub files: Vec<FileRecord>,
    /// `None` when skipped for lack of a backend
    pub parsing: Option<Vec<ParseOutcome>>,
    pub simulation: Option<SimulationReport>,
}

/// Doctor diagnostics system
pub struct Doctor {
    root: PathBuf,
    config: Config,
}

impl Doctor {
    /// Create a doctor resolving config paths against `root`
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Run all checks, writing the report as it goes
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> RunReport {
        tracing::debug!(root = %self.root.display(), "starting diagnostics");

        reporter.line("YAML LOADING DIAGNOSTICS");
        reporter.line("Checking only YAML-related functionality");

        let capability = self.check_capability(reporter);
        let files = self.check_files(reporter);

        let (parsing, simulation) = match capability.backend() {
            Some(backend) => {
                let existing = existing_paths(&files);
                let parsing = self.check_parsing(backend, &existing, reporter);
                let simulation = self.check_simulation(backend, reporter);
                (Some(parsing), Some(simulation))
            }
            None => {
                tracing::debug!("skipping parsing and simulation checks");
                (None, None)
            }
        };

        reporter.section("YAML DIAGNOSTICS COMPLETE");
        reporter.line("Review the results above to identify YAML-specific issues.");
        reporter.flush();

        RunReport {
            capability,
            files,
            parsing,
            simulation,
        }
    }

    /// Absolute location of a configured path
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// Read a file as UTF-8, separating "not found" from other I/O failures
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DoctorError::NotFound(path.to_path_buf()),
        _ => DoctorError::Io(e),
    })
}

/// Read and parse one file
pub(crate) fn load_document(backend: &Backend, path: &Path) -> Result<Document> {
    let text = read_text(path)?;
    tracing::trace!(path = %path.display(), bytes = text.len(), "parsing");
    backend.parse(&text)
}
