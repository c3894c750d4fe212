//! Infrastructure layer for hyperconf
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: override sources, the JSON snapshot store, manifest
//! loading, and the tool's own settings file.

pub mod config;
mod file_format;
pub mod manifest;
pub mod overrides;
pub mod snapshot;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig};
pub use manifest::{ManifestError, ManifestLoader};
pub use overrides::{EnvOverrides, FileOverrides, parse_assignments};
pub use snapshot::JsonSnapshotStore;
