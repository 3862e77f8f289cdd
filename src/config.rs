//! Configuration management for the disk simulator
//!
//! Limits applied by a storage instance, loaded from an optional TOML file
//! with environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default name of the optional configuration file (without extension)
pub const CONFIG_FILE: &str = "memdisk";

/// Prefix of the environment variables overriding the file
pub const ENV_PREFIX: &str = "MEMDISK";

/// Limits enforced when creating and updating nodes
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Longest accepted file or folder name, in bytes
    /// Environment: MEMDISK_MAX_NAME_LENGTH
    pub max_name_length: usize,

    /// Largest accepted file content, in bytes
    /// Environment: MEMDISK_MAX_FILE_SIZE
    pub max_file_size: usize,

    /// Deepest folder that can be created (the root is depth 0)
    /// Environment: MEMDISK_MAX_DEPTH
    pub max_depth: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
            max_file_size: 16 * 1024 * 1024,
            max_depth: 64,
        }
    }
}

impl StorageConfig {
    /// Load configuration from memdisk.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file (extension optional) with environment overrides.
    ///
    /// A missing file is not an error; every field falls back to its default.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StorageConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_name_length == 0 {
            return Err(config::ConfigError::Message(
                "max_name_length must be greater than 0".into(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(config::ConfigError::Message(
                "max_file_size must be greater than 0".into(),
            ));
        }

        if self.max_depth == 0 {
            return Err(config::ConfigError::Message(
                "max_depth must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
