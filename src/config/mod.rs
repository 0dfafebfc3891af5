//! Configuration module
//!
//! Handles benchmark settings

mod settings;

pub use settings::{BenchConfig, ConfigError, DEFAULT_INPUT};

use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "ifabench", "Ifabench").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}
