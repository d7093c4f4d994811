//! YAML backend capability and parsing
//!
//! The backend is compiled in through the default `yaml` feature. Holding a
//! [`Backend`] value means parsing is possible; without the feature the type
//! cannot be constructed and [`Backend::load`] reports why.

pub mod document;
pub mod shape;
pub mod tips;

pub use document::Document;
pub use shape::{classify, truncate_preview, EntryKind, EntrySummary, Shape, ShapeLimits};
pub use tips::{tip_for, Tip};

use crate::errors::{DoctorError, Result};

/// Name of the YAML library behind the backend
pub const BACKEND_NAME: &str = "serde_yaml";

/// Version line of the backend, matching the Cargo.toml requirement
pub const BACKEND_VERSION: &str = "0.9";

#[cfg(feature = "yaml")]
const SELF_TEST_DOCUMENT: &str = "sample:\n  - 1\n  - two\n";

/// Handle to a working YAML backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backend {
    #[cfg(not(feature = "yaml"))]
    never: std::convert::Infallible,
}

impl Backend {
    /// Load the backend and make sure it parses a sample document
    pub fn load() -> Result<Self> {
        #[cfg(feature = "yaml")]
        {
            let backend = Backend {};
            backend.self_test()?;
            Ok(backend)
        }
        #[cfg(not(feature = "yaml"))]
        {
            Err(DoctorError::BackendUnavailable(
                "built without the `yaml` feature".to_string(),
            ))
        }
    }

    /// Backend version identifier, e.g. `serde_yaml 0.9`
    pub fn version(&self) -> String {
        format!("{} {}", BACKEND_NAME, BACKEND_VERSION)
    }

    /// Parse YAML text into a [`Document`]
    ///
    /// Blank input and comment-only input yield [`Document::Null`].
    /// Malformed input yields a structural error (see
    /// [`DoctorError::is_structural`]).
    #[cfg(feature = "yaml")]
    pub fn parse(&self, text: &str) -> Result<Document> {
        if is_blank_document(text) {
            return Ok(Document::Null);
        }
        let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
        // `<<: *anchor` entries are folded into their mapping
        value.apply_merge()?;
        Ok(Document::from(value))
    }

    #[cfg(not(feature = "yaml"))]
    pub fn parse(&self, _text: &str) -> Result<Document> {
        match self.never {}
    }

    #[cfg(feature = "yaml")]
    fn self_test(&self) -> Result<()> {
        let sample = self.parse(SELF_TEST_DOCUMENT)?;
        match sample.mapping_keys() {
            Some(keys) if keys == ["sample"] => Ok(()),
            _ => Err(DoctorError::BackendUnavailable(format!(
                "sample document parsed as {} instead of a mapping",
                sample.type_name()
            ))),
        }
    }
}

/// Outcome of the capability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available(Backend),
    Unavailable(String),
}

impl Capability {
    /// Try to load the backend, capturing the failure reason
    pub fn detect() -> Self {
        match Backend::load() {
            Ok(backend) => Capability::Available(backend),
            Err(DoctorError::BackendUnavailable(reason)) => Capability::Unavailable(reason),
            Err(e) => Capability::Unavailable(e.to_string()),
        }
    }

    pub fn backend(&self) -> Option<&Backend> {
        match self {
            Capability::Available(backend) => Some(backend),
            Capability::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend().is_some()
    }
}

/// True when the text holds no YAML node: only whitespace, comments,
/// directives or document markers.
pub fn is_blank_document(text: &str) -> bool {
    text.trim_start_matches('\u{feff}').lines().all(|line| {
        let line = line.trim();
        line.is_empty()
            || line.starts_with('#')
            || line.starts_with('%')
            || line == "---"
            || line == "..."
    })
}
