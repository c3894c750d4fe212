//! Resolve Manifest use case
//!
//! Gathers overrides from every configured source, resolves a manifest
//! against them, and optionally stores the resulting snapshot.

use crate::config::ResolveOptions;
use crate::definition::manifest::Manifest;
use crate::ports::override_source::{OverrideSource, OverrideSourceError};
use crate::ports::snapshot_store::{SnapshotRecord, SnapshotStore, SnapshotStoreError};
use hyperconf_domain::{OverrideMapping, ParamError, ResolvedParam, ResolvedSnapshot};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while resolving a manifest
#[derive(Error, Debug)]
pub enum ResolveManifestError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Source(#[from] OverrideSourceError),

    #[error("Failed to save snapshot: {0}")]
    Store(#[from] SnapshotStoreError),
}

impl ResolveManifestError {
    /// Check if this error is a type mismatch in a supplied value
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ResolveManifestError::Param(e) if e.is_type_mismatch())
    }
}

/// Input for the ResolveManifest use case
#[derive(Debug, Clone)]
pub struct ResolveManifestInput {
    pub manifest: Manifest,
    pub options: ResolveOptions,
}

impl ResolveManifestInput {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }
}

/// Output of the ResolveManifest use case
#[derive(Debug, Clone)]
pub struct ResolveManifestOutput {
    /// Name of the resolved manifest
    pub config: String,
    /// Resolved parameters in declaration order
    pub params: Vec<ResolvedParam>,
    /// Snapshot of the pass
    pub snapshot: ResolvedSnapshot,
    /// Where the snapshot was stored, if a sink is configured
    pub saved_to: Option<String>,
}

/// Use case for resolving a manifest against layered override sources
#[derive(Default)]
pub struct ResolveManifestUseCase {
    sources: Vec<Arc<dyn OverrideSource>>,
    snapshot_sink: Option<Arc<dyn SnapshotStore>>,
}

impl ResolveManifestUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override source. Later sources take precedence.
    pub fn with_source(mut self, source: Arc<dyn OverrideSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Store the snapshot of every successful pass.
    pub fn with_snapshot_sink(mut self, store: Arc<dyn SnapshotStore>) -> Self {
        self.snapshot_sink = Some(store);
        self
    }

    /// Merge all sources into a single mapping.
    pub fn collect_overrides(&self) -> Result<OverrideMapping, OverrideSourceError> {
        let mut overrides = OverrideMapping::new();
        for source in &self.sources {
            let values = source.load()?;
            debug!("Loaded {} override(s) from {}", values.len(), source.origin());
            overrides.merge(values);
        }
        Ok(overrides)
    }

    /// Execute the use case
    pub fn execute(
        &self,
        input: ResolveManifestInput,
    ) -> Result<ResolveManifestOutput, ResolveManifestError> {
        let overrides = self.collect_overrides()?;
        let config_name = input.manifest.name().to_string();

        info!(
            "Resolving manifest '{}' ({} parameters)",
            config_name,
            input.manifest.len()
        );

        let config = input
            .manifest
            .into_hyperconfig()
            .with_options(input.options);
        let (_, params, snapshot) = config.resolve(&overrides)?.into_parts();

        let saved_to = match &self.snapshot_sink {
            Some(store) => {
                store.save(&SnapshotRecord::new(&config_name, snapshot.clone()))?;
                info!("Saved snapshot to {}", store.location());
                Some(store.location())
            }
            None => None,
        };

        Ok(ResolveManifestOutput {
            config: config_name,
            params,
            snapshot,
            saved_to,
        })
    }
}
