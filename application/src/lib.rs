//! Application layer for hyperconf
//!
//! This crate contains configuration scopes and definitions, port
//! definitions, and the resolve use case. It depends only on the domain
//! layer.

pub mod config;
pub mod definition;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolveOptions;
pub use definition::{
    hyperconfig::{Hyperconfig, ResolvedConfig},
    manifest::Manifest,
    scope::ConfigScope,
};
pub use ports::{
    override_source::{OverrideSource, OverrideSourceError, StaticOverrides},
    snapshot_store::{SnapshotRecord, SnapshotReplay, SnapshotStore, SnapshotStoreError},
};
pub use use_cases::resolve_manifest::{
    ResolveManifestError, ResolveManifestInput, ResolveManifestOutput, ResolveManifestUseCase,
};
