//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the tool's own settings
//! file (`hyperconf.toml`). They are deserialized directly and use domain
//! types where appropriate.

use hyperconf_domain::{OutputFormat, UnknownOverridePolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("overrides.env_prefix cannot be empty")]
    EmptyEnvPrefix,

    #[error("snapshot.path cannot be empty")]
    EmptySnapshotPath,
}

/// Raw resolve configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolveConfig {
    /// Treatment of overrides for undeclared parameters (ignore, reject)
    pub unknown_overrides: UnknownOverridePolicy,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw override-source configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOverridesConfig {
    /// Read overrides from environment variables with this prefix
    /// (e.g. `HYPERCONF_VALUE_`); `__` separates name segments
    pub env_prefix: Option<String>,
}

/// Raw snapshot configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSnapshotConfig {
    /// Always save the snapshot of a successful resolve to this path
    pub path: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Resolution settings
    pub resolve: FileResolveConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Override source settings
    pub overrides: FileOverridesConfig,
    /// Snapshot settings
    pub snapshot: FileSnapshotConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(prefix) = &self.overrides.env_prefix
            && prefix.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyEnvPrefix);
        }

        if let Some(path) = &self.snapshot.path
            && path.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptySnapshotPath);
        }

        Ok(())
    }
}
