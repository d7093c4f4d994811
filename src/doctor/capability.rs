//! Check 1: is the YAML backend usable

use super::Doctor;
use crate::report::Reporter;
use crate::yaml::Capability;
use std::io::Write;

impl Doctor {
    /// Detect the YAML backend and report its version or how to get it
    pub fn check_capability<W: Write>(&self, reporter: &mut Reporter<W>) -> Capability {
        reporter.section("YAML CAPABILITY CHECK");

        let capability = Capability::detect();
        match &capability {
            Capability::Available(backend) => {
                tracing::debug!(version = %backend.version(), "YAML backend loaded");
                reporter.pass("YAML backend loaded successfully");
                reporter.pass(format!("Backend version: {}", backend.version()));
            }
            Capability::Unavailable(reason) => {
                tracing::warn!(%reason, "YAML backend unavailable");
                reporter.fail(format!("Cannot load YAML backend: {}", reason));
                reporter.blank();
                reporter.line("To fix this, rebuild with the `yaml` feature enabled:");
                reporter.detail("cargo install yamldoctor --features yaml");
            }
        }

        capability
    }
}
