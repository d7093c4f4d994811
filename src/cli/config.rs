//! Configuration management for yamldoctor
//!
//! Optional TOML file selecting which files to check and how much of them
//! to show. Without `--config` the built-in defaults are used and no file
//! is looked up.

use crate::doctor::ConfigKind;
use crate::errors::{DoctorError, Result};
use crate::yaml::ShapeLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for yamldoctor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub files: FilesConfig,
    pub report: ReportConfig,
}

/// Relative paths of the files under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub agents: PathBuf,
    pub tasks: PathBuf,
}

/// Report layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub preview_lines: usize,
    pub max_sub_keys: usize,
    pub preview_chars: usize,
    pub color: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            agents: PathBuf::from("config/agents.yaml"),
            tasks: PathBuf::from("config/tasks.yaml"),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_lines: 5,
            max_sub_keys: 3,
            preview_chars: 100,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DoctorError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| DoctorError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for kind in ConfigKind::ALL {
            if self.path_for(kind).as_os_str().is_empty() {
                return Err(DoctorError::Config(format!(
                    "path for {} must not be empty",
                    kind.name()
                )));
            }
        }

        if self.report.preview_lines == 0 || self.report.preview_lines > 100 {
            return Err(DoctorError::Config(
                "preview_lines must be between 1 and 100".to_string()
            ));
        }

        if self.report.max_sub_keys == 0 {
            return Err(DoctorError::Config(
                "max_sub_keys must be greater than 0".to_string()
            ));
        }

        if self.report.preview_chars == 0 {
            return Err(DoctorError::Config(
                "preview_chars must be greater than 0".to_string()
            ));
        }

        Ok(())
    }

    /// Relative path configured for a logical config name
    pub fn path_for(&self, kind: ConfigKind) -> &Path {
        match kind {
            ConfigKind::Agents => &self.files.agents,
            ConfigKind::Tasks => &self.files.tasks,
        }
    }

    /// Both checked paths, in fixed order
    pub fn targets(&self) -> [(ConfigKind, &Path); 2] {
        ConfigKind::ALL.map(|kind| (kind, self.path_for(kind)))
    }

    pub fn shape_limits(&self) -> ShapeLimits {
        ShapeLimits {
            max_sub_keys: self.report.max_sub_keys,
            preview_chars: self.report.preview_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.files.agents, PathBuf::from("config/agents.yaml"));
        assert_eq!(config.files.tasks, PathBuf::from("config/tasks.yaml"));
        assert_eq!(config.report.preview_lines, 5);
        assert_eq!(config.shape_limits(), ShapeLimits::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str("[files]\ntasks = \"cfg/tasks.yml\"\n").unwrap();
        assert_eq!(config.files.agents, PathBuf::from("config/agents.yaml"));
        assert_eq!(config.files.tasks, PathBuf::from("cfg/tasks.yml"));
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_targets_order() {
        let config = Config::default();
        let targets = config.targets();
        assert_eq!(targets[0].0, ConfigKind::Agents);
        assert_eq!(targets[1].0, ConfigKind::Tasks);
        assert_eq!(targets[1].1, Path::new("config/tasks.yaml"));
    }

    #[test]
    fn test_config_validation_preview_lines() {
        let mut config = Config::default();
        config.report.preview_lines = 0;
        assert!(config.validate().is_err());
        config.report.preview_lines = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_path() {
        let mut config = Config::default();
        config.files.agents = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_limits() {
        let mut config = Config::default();
        config.report.max_sub_keys = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.preview_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::from_toml_str("[report\npreview_lines = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doctor.toml");
        std::fs::write(&path, "[report]\ncolor = false\npreview_lines = 2\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert!(!config.report.color);
        assert_eq!(config.report.preview_lines, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(Some(temp_dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(matches!(err, DoctorError::Config(_)));
    }
}
