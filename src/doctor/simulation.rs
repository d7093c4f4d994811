//! Check 4: replay how the application loads its configuration
//!
//! Independent of the earlier checks; existence is checked again here.

use super::{load_document, ConfigBundle, ConfigKind, Doctor};
use crate::errors::DoctorError;
use crate::report::Reporter;
use crate::yaml::Backend;
use std::io::Write;
use std::path::Path;

/// Outcome of loading one logical config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        type_name: &'static str,
        keys: Option<Vec<String>>,
    },
    NotFound,
    YamlError(String),
    OtherError(String),
}

/// Type of each config after defaulting missing ones to an empty mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub agents: &'static str,
    pub tasks: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub loads: Vec<(ConfigKind, LoadOutcome)>,
    pub bundle: ConfigBundle,
    /// `None` when nothing was loaded
    pub assignment: Option<Assignment>,
}

impl Doctor {
    /// Load both configs the way the application would
    pub fn check_simulation<W: Write>(
        &self,
        backend: &Backend,
        reporter: &mut Reporter<W>,
    ) -> SimulationReport {
        reporter.section("CODE SIMULATION TEST");
        reporter.line("Replaying the application's configuration load...");

        let mut bundle = ConfigBundle::new();
        let loads: Vec<_> = self
            .config
            .targets()
            .into_iter()
            .map(|(kind, path)| {
                let outcome = self.simulate_load(backend, kind, path, &mut bundle, reporter);
                (kind, outcome)
            })
            .collect();

        let assignment = if bundle.is_empty() {
            None
        } else {
            Some(assign(&bundle, reporter))
        };

        SimulationReport {
            loads,
            bundle,
            assignment,
        }
    }

    fn simulate_load<W: Write>(
        &self,
        backend: &Backend,
        kind: ConfigKind,
        path: &Path,
        bundle: &mut ConfigBundle,
        reporter: &mut Reporter<W>,
    ) -> LoadOutcome {
        reporter.blank();
        reporter.line(format!("Testing load of {}: {}", kind.name(), path.display()));

        let absolute = self.resolve(path);
        if !absolute.exists() {
            reporter.fail("File not found - the application would fail to open it");
            return LoadOutcome::NotFound;
        }

        match load_document(backend, &absolute) {
            Ok(document) => {
                let type_name = document.type_name();
                let keys = document
                    .mapping_keys()
                    .map(|keys| keys.into_iter().map(str::to_string).collect::<Vec<_>>());

                reporter.pass(format!("Successfully loaded {} configuration", kind.name()));
                reporter.detail(format!("Type: {}", type_name));
                if let Some(keys) = &keys {
                    reporter.detail(format!("Keys: {:?}", keys));
                }

                bundle.insert(kind, document);
                LoadOutcome::Loaded { type_name, keys }
            }
            Err(DoctorError::NotFound(missing)) => {
                tracing::debug!(path = %missing.display(), "file vanished before open");
                reporter.fail(format!("File not found: {}", missing.display()));
                LoadOutcome::NotFound
            }
            Err(e) if e.is_structural() => {
                reporter.fail(format!("YAML Error: {}", e));
                LoadOutcome::YamlError(e.to_string())
            }
            Err(e) => {
                reporter.fail(format!("Other Error: {}", e));
                LoadOutcome::OtherError(e.to_string())
            }
        }
    }
}

/// Read each config back, defaulting absent ones to an empty mapping
fn assign<W: Write>(bundle: &ConfigBundle, reporter: &mut Reporter<W>) -> Assignment {
    reporter.blank();
    reporter.line("Testing variable assignment...");

    let agents = bundle.get_or_default(ConfigKind::Agents).type_name();
    let tasks = bundle.get_or_default(ConfigKind::Tasks).type_name();
    reporter.pass(format!("agents_config type: {}", agents));
    reporter.pass(format!("tasks_config type: {}", tasks));

    Assignment { agents, tasks }
}
