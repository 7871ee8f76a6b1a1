//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration management for CRD generation
//!
//! This module provides configuration options for a generation run, with
//! defaults matching the reference generation parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of definitions generated per run
pub const DEFAULT_COUNT: u32 = 100;

/// Default maximum nesting level of the embedded field schema
pub const DEFAULT_MAX_NESTING_LEVEL: u32 = 10;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "generatedCRDS";

/// Main configuration for CRD generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of definitions to generate
    pub count: u32,

    /// Maximum nesting level of each definition's field schema
    pub max_nesting_level: u32,

    /// Output directory for generated files
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            max_nesting_level: DEFAULT_MAX_NESTING_LEVEL,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &PathBuf) -> anyhow::Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &GeneratorConfig, path: &PathBuf) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &GeneratorConfig) -> anyhow::Result<()> {
    if config.count == 0 {
        return Err(anyhow::anyhow!("Definition count must be greater than 0"));
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("Output directory cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 100);
        assert_eq!(config.max_nesting_level, 10);
        assert_eq!(config.output_dir, PathBuf::from("generatedCRDS"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = GeneratorConfig::default();
        assert!(validate_config(&config).is_ok());

        config.count = 0;
        assert!(validate_config(&config).is_err());

        config.count = 1;
        config.output_dir = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_nesting_level_is_valid() {
        let config = GeneratorConfig {
            max_nesting_level: 0,
            ..GeneratorConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GeneratorConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: GeneratorConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config.count, deserialized.count);
        assert_eq!(config.max_nesting_level, deserialized.max_nesting_level);
        assert_eq!(config.output_dir, deserialized.output_dir);
    }

    #[test]
    fn test_config_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("crd-generator.toml");

        let config = GeneratorConfig {
            count: 5,
            max_nesting_level: 2,
            output_dir: PathBuf::from("out"),
        };

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded.count, 5);
        assert_eq!(loaded.max_nesting_level, 2);
        assert_eq!(loaded.output_dir, PathBuf::from("out"));
    }
}
