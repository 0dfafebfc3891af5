//! Benchmark settings

use crate::core::dataset::DEFAULT_FACTOR;
use crate::core::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory
pub const DEFAULT_INPUT: &str = "ifas/ifas.small";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Could not read config {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML decoding error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Dataset file, one candidate per line
    pub input: PathBuf,
    /// How many times each line is repeated in the working set
    pub factor: usize,
    /// Number of timed trials per validator
    pub trials: u32,
    /// Report format
    pub format: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            factor: DEFAULT_FACTOR,
            trials: 1,
            format: OutputFormat::Text,
        }
    }
}

impl BenchConfig {
    /// Load config from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from the user config directory, or the defaults if
    /// there is none
    pub fn load_default() -> Result<Self, ConfigError> {
        match super::config_file() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.input, PathBuf::from("ifas/ifas.small"));
        assert_eq!(config.factor, 100);
        assert_eq!(config.trials, 1);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "factor = 10").unwrap();
        writeln!(file, "format = \"json\"").unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.factor, 10);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn test_roundtrip() {
        let config = BenchConfig {
            input: PathBuf::from("data/ifas.big"),
            factor: 5,
            trials: 3,
            format: OutputFormat::Csv,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(toml::from_str::<BenchConfig>(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "factor = \"many\"").unwrap();
        assert!(matches!(
            BenchConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = BenchConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
        match err {
            ConfigError::Read { path: found, source } => {
                assert_eq!(found, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
