//! Output formatter trait

use hyperconf_application::{Manifest, ResolveManifestOutput};

/// Trait for formatting resolution results
pub trait OutputFormatter {
    /// Format a resolved configuration, restricted to `only` when non-empty
    fn format_resolved(&self, output: &ResolveManifestOutput, only: &[String]) -> String;

    /// Format a manifest's declarations
    fn format_manifest(&self, manifest: &Manifest) -> String;
}
