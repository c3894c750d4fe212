//! Manifest files: configurations declared as data.

mod file_manifest;
mod loader;

pub use file_manifest::{FileManifest, FileParamDecl};
pub use loader::{ManifestError, ManifestLoader};
