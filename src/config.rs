//! Application configuration
//!
//! Layered with [figment](https://docs.rs/figment):
//!
//! 1. Built-in defaults ([`AppConfig::default`])
//! 2. An optional YAML file passed with `--config`
//! 3. `TRACEPLAY_*` environment variables (`__` separates nested keys, e.g.
//!    `TRACEPLAY_LIMITS__MAX_LEN=20`)
//!
//! Command line flags are applied on top by the binary.

use crate::producer::{Limits, MAX_FACTORIAL_I64};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("configuration parsing error: {0}")]
    Parsing(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Parsing(Box::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay between automatic advances while playing
    pub tick_interval_ms: u64,
    pub limits: Limits,
    /// Where log output goes; the terminal is owned by the UI
    pub log_file: PathBuf,
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Sequence shown on startup
    pub default_input: String,
    pub default_target: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tick_interval_ms: 500,
            limits: Limits::default(),
            log_file: PathBuf::from("traceplay.log"),
            log_level: "info".to_string(),
            default_input: "5, 3, 1, 4, 2".to_string(),
            default_target: 4,
        }
    }
}

impl AppConfig {
    /// Load defaults, then `path` (if given), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: AppConfig = figment
            .merge(Env::prefixed("TRACEPLAY_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_len == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_len must be at least 1".to_string(),
            ));
        }
        if !(0..=MAX_FACTORIAL_I64).contains(&self.limits.max_factorial) {
            return Err(ConfigError::Invalid(format!(
                "limits.max_factorial must be between 0 and {}",
                MAX_FACTORIAL_I64
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.limits.max_len, 50);
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_interval_ms: 250").unwrap();
        writeln!(file, "limits:").unwrap();
        writeln!(file, "  max_len: 20").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.limits.max_len, 20);
        // untouched keys keep their defaults
        assert_eq!(config.limits.max_factorial, 12);
        assert_eq!(config.default_target, 4);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/traceplay.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_interval_ms: 0").unwrap();
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_factorial_limit_above_i64_range() {
        let config = AppConfig {
            limits: Limits {
                max_factorial: 25,
                ..Limits::default()
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
