//! Application configuration
//!
//! Optional `config.toml` under the platform config directory; every field
//! has a default so a missing file or missing keys are fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dataset::io::SaveFormat;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default save format when a command gets no --format
    #[serde(default)]
    pub format: SaveFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: SaveFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum duplicate groups printed to the console
    #[serde(default = "default_group_limit")]
    pub group_limit: usize,
}

fn default_group_limit() -> usize {
    10
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            group_limit: default_group_limit(),
        }
    }
}

impl Config {
    fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "huecull", "huecull")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("/tmp/huecull/config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content =
                std::fs::read_to_string(&path).context("Failed to read config file")?;
            let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, SaveFormat::Json);
        assert_eq!(config.report.group_limit, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[report]\ngroup_limit = 3\n").unwrap();
        assert_eq!(config.report.group_limit, 3);
        assert_eq!(config.output.format, SaveFormat::Json);
    }

    #[test]
    fn test_full_round_trip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.report.group_limit, config.report.group_limit);
    }
}
