//! Configuration management for Veil.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main engine configuration.
///
/// This is loaded from `~/.config/veil/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Table sampling and example caps
    pub detection: DetectionConfig,
    /// Rewrite settings
    pub redaction: RedactionConfig,
    /// Named-entity backend settings
    pub ner: NerConfig,
    /// Log filter settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or fail validation
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults if not found.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let config: Self = if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            tracing::debug!("Config file not found, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `VEIL_SAMPLE_ROWS`: Override the per-column head sample size
    /// - `VEIL_MAX_EXAMPLES`: Override the per-column example span cap
    /// - `VEIL_NER_ENABLED`: Override NER enabled status (true/false)
    /// - `VEIL_LOG`: Override the default log filter
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("VEIL_SAMPLE_ROWS") {
            if let Ok(rows) = val.parse() {
                self.detection.sample_rows = rows;
                tracing::debug!("Override detection.sample_rows from env: {}", rows);
            }
        }

        if let Some(val) = var("VEIL_MAX_EXAMPLES") {
            if let Ok(max) = val.parse() {
                self.detection.max_examples = max;
                tracing::debug!("Override detection.max_examples from env: {}", max);
            }
        }

        if let Some(val) = var("VEIL_NER_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.ner.enabled = enabled;
                tracing::debug!("Override ner.enabled from env: {}", enabled);
            }
        }

        if let Some(filter) = var("VEIL_LOG") {
            tracing::debug!("Override logging.filter from env: {}", filter);
            self.logging.filter = filter;
        }
    }

    /// Check values that would make analysis meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.detection.sample_rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "detection.sample_rows".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to the default location.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/veil/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "veil", "veil").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Sampling and result-size caps for table analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Number of leading rows scanned per column
    pub sample_rows: usize,
    /// Maximum example spans kept per column
    pub max_examples: usize,
    /// Maximum raw preview values kept per column
    pub max_sample_values: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_rows: 100,
            max_examples: 10,
            max_sample_values: 5,
        }
    }
}

/// Rewrite settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// Character repeated over each redacted span
    pub block_char: char,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self { block_char: '█' }
    }
}

/// Named-entity backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// Whether a NER backend is required
    pub enabled: bool,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,veil=debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detection.sample_rows, 100);
        assert_eq!(config.detection.max_examples, 10);
        assert_eq!(config.detection.max_sample_values, 5);
        assert_eq!(config.redaction.block_char, '█');
        assert!(config.ner.enabled);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[detection]"));
        assert!(toml_str.contains("[redaction]"));
        assert!(toml_str.contains("[ner]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.detection.sample_rows = 250;
        config.redaction.block_char = '#';

        config.save_to(&config_path).expect("save config");
        let loaded = AppConfig::load_from(&config_path).expect("load config");

        assert_eq!(loaded.detection.sample_rows, 250);
        assert_eq!(loaded.redaction.block_char, '#');
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().expect("create temp dir");
        let loaded =
            AppConfig::load_from(&tmp.path().join("absent.toml")).expect("load defaults");
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("VEIL_SAMPLE_ROWS", "20"),
            ("VEIL_MAX_EXAMPLES", "not-a-number"),
            ("VEIL_NER_ENABLED", "false"),
            ("VEIL_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.detection.sample_rows, 20);
        assert_eq!(config.detection.max_examples, 10);
        assert!(!config.ner.enabled);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_zero_sample_rows_rejected() {
        let toml_str = r"
[detection]
sample_rows = 0
";
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, toml_str).expect("write config file");

        let err = AppConfig::load_from(&config_path).expect_err("zero rows must be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[redaction]
block_char = "*"
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.redaction.block_char, '*');
        // These should be defaults
        assert_eq!(config.detection.sample_rows, 100);
        assert!(config.ner.enabled);
    }
}
