//! JSON file snapshot store.
//!
//! Each [`SnapshotRecord`] is written as a pretty-printed JSON document:
//!
//! ```json
//! {
//!   "config": "training",
//!   "captured_at": "2026-01-01T00:00:00Z",
//!   "values": { "layer_trainable": [false, true, true], "stream": true }
//! }
//! ```

use hyperconf_application::{SnapshotRecord, SnapshotStore, SnapshotStoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> SnapshotStoreError {
        SnapshotStoreError::Io {
            location: self.location(),
            message: e.to_string(),
        }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn save(&self, record: &SnapshotRecord) -> Result<(), SnapshotStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(record).map_err(|e| SnapshotStoreError::Malformed {
            location: self.location(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json + "\n").map_err(|e| self.io_error(e))?;

        debug!(
            "Wrote snapshot of '{}' ({} values) to {}",
            record.config,
            record.values.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<SnapshotRecord, SnapshotStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SnapshotStoreError::NotFound(self.location()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| SnapshotStoreError::Malformed {
            location: self.location(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperconf_domain::{ParamName, ParamValue, ResolvedSnapshot};

    fn record() -> SnapshotRecord {
        let values: ResolvedSnapshot = [
            (ParamName::new("stream").unwrap(), ParamValue::Bool(true)),
            (
                ParamName::new("layer_trainable").unwrap(),
                ParamValue::from(vec![false, true, true]),
            ),
        ]
        .into_iter()
        .collect();
        SnapshotRecord::new("training", values)
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("runs").join("last.json"));

        let saved = record();
        store.save(&saved).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("last.json"));
        store.save(&record()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["config"], "training");
        assert_eq!(json["values"]["stream"], true);
        assert_eq!(json["values"]["layer_trainable"], serde_json::json!([false, true, true]));
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("missing.json"));
        assert!(matches!(store.load(), Err(SnapshotStoreError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"config": "x", "values": {"not valid": true}}"#).unwrap();
        let store = JsonSnapshotStore::new(path);
        assert!(matches!(store.load(), Err(SnapshotStoreError::Malformed { .. })));
    }
}
