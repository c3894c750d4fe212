//! Snapshot store port
//!
//! Persists resolved snapshots so a configuration can be replayed later.

use super::override_source::{OverrideSource, OverrideSourceError};
use chrono::{DateTime, Utc};
use hyperconf_domain::{OverrideMapping, ResolvedSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while saving or loading snapshots
#[derive(Error, Debug)]
pub enum SnapshotStoreError {
    #[error("Snapshot not found at {0}")]
    NotFound(String),

    #[error("I/O error on {location}: {message}")]
    Io { location: String, message: String },

    #[error("Malformed snapshot at {location}: {message}")]
    Malformed { location: String, message: String },
}

/// A captured snapshot with the configuration it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Name of the resolved configuration
    pub config: String,
    /// When the resolution pass completed
    pub captured_at: DateTime<Utc>,
    /// Resolved values
    pub values: ResolvedSnapshot,
}

impl SnapshotRecord {
    pub fn new(config: impl Into<String>, values: ResolvedSnapshot) -> Self {
        Self {
            config: config.into(),
            captured_at: Utc::now(),
            values,
        }
    }
}

/// Storage for snapshot records.
pub trait SnapshotStore: Send + Sync {
    /// Where records are stored (for display).
    fn location(&self) -> String;

    fn save(&self, record: &SnapshotRecord) -> Result<(), SnapshotStoreError>;

    fn load(&self) -> Result<SnapshotRecord, SnapshotStoreError>;
}

/// Adapter: `SnapshotStore` → `OverrideSource`
///
/// Replays a stored snapshot as overrides.
pub struct SnapshotReplay {
    store: Arc<dyn SnapshotStore>,
    expected_config: Option<String>,
}

impl SnapshotReplay {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            expected_config: None,
        }
    }

    /// Warn when the stored snapshot was captured from another configuration.
    pub fn for_config(mut self, name: impl Into<String>) -> Self {
        self.expected_config = Some(name.into());
        self
    }

    /// Check if `record` belongs to a configuration other than the expected one
    pub fn is_foreign(&self, record: &SnapshotRecord) -> bool {
        self.expected_config
            .as_deref()
            .is_some_and(|expected| expected != record.config)
    }
}

impl OverrideSource for SnapshotReplay {
    fn origin(&self) -> String {
        format!("snapshot {}", self.store.location())
    }

    fn load(&self) -> Result<OverrideMapping, OverrideSourceError> {
        let record = self.store.load()?;
        if self.is_foreign(&record) {
            warn!(
                "Snapshot {} was captured from '{}', not '{}'; undeclared names will not apply",
                self.store.location(),
                record.config,
                self.expected_config.as_deref().unwrap_or_default()
            );
        }
        Ok(record.values.into_overrides())
    }
}
