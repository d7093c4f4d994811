//! Error types for yamldoctor
//!
//! Every failure the checks can hit is a variant here. None of them is
//! fatal: the runner converts each one into report text where it occurs.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diagnostic checks
#[derive(Error, Debug)]
pub enum DoctorError {
    /// YAML backend not compiled in or not working
    #[error("YAML backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Checked file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Structural parse error; displays the backend's raw message
    #[cfg(feature = "yaml")]
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O errors, including invalid UTF-8
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DoctorError {
    /// True for malformed-document errors as opposed to access failures
    pub fn is_structural(&self) -> bool {
        #[cfg(feature = "yaml")]
        {
            matches!(self, DoctorError::Yaml(_))
        }
        #[cfg(not(feature = "yaml"))]
        {
            false
        }
    }
}

/// Result type alias for diagnostic operations
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = DoctorError::NotFound(PathBuf::from("/tmp/config/agents.yaml"));
        assert!(err.to_string().contains("/tmp/config/agents.yaml"));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err: DoctorError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
        assert!(!err.is_structural());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_error_is_structural() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let raw = yaml_err.to_string();
        let err: DoctorError = yaml_err.into();
        assert!(err.is_structural());
        assert_eq!(err.to_string(), raw);
    }
}
