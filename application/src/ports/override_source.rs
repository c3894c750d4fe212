//! Override source port
//!
//! Defines where override mappings come from (files, environment, command
//! line). Implementations live in the infrastructure layer.

use hyperconf_domain::OverrideMapping;
use thiserror::Error;

/// Errors that can occur while loading overrides
#[derive(Error, Debug)]
pub enum OverrideSourceError {
    #[error("Could not read overrides from {origin}: {message}")]
    Unreadable { origin: String, message: String },

    #[error("Invalid override '{name}' in {origin}: {message}")]
    InvalidValue {
        origin: String,
        name: String,
        message: String,
    },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] crate::ports::snapshot_store::SnapshotStoreError),
}

/// A source of override values.
///
/// Sources are applied in order by the resolve use case; entries from later
/// sources replace earlier ones.
pub trait OverrideSource: Send + Sync {
    /// Human-readable origin, used in logs and errors (e.g. a file path).
    fn origin(&self) -> String;

    /// Load the overrides this source provides.
    fn load(&self) -> Result<OverrideMapping, OverrideSourceError>;
}

/// Overrides held in memory, e.g. already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticOverrides {
    origin: String,
    values: OverrideMapping,
}

impl StaticOverrides {
    pub fn new(origin: impl Into<String>, values: OverrideMapping) -> Self {
        Self {
            origin: origin.into(),
            values,
        }
    }
}

impl OverrideSource for StaticOverrides {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn load(&self) -> Result<OverrideMapping, OverrideSourceError> {
        Ok(self.values.clone())
    }
}
