//! Manifest loading and validation

use super::file_manifest::{FileManifest, FileParamDecl};
use crate::file_format::is_json_path;
use hyperconf_application::Manifest;
use hyperconf_domain::{ParamError, ParamName, ParamValue, ParameterDeclaration};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Could not read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("parameter '{0}' has no default (only multi_* kinds may omit it)")]
    MissingDefault(String),

    #[error(transparent)]
    Param(#[from] ParamError),
}

/// Loads manifests from TOML or JSON files
pub struct ManifestLoader;

impl ManifestLoader {
    /// Load and validate a manifest file.
    ///
    /// `.json` files are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: FileManifest = if is_json_path(path) {
            serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let fallback_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".to_string());

        let manifest = Self::build(raw, &fallback_name)?;
        debug!(
            "Loaded manifest '{}' with {} parameters from {}",
            manifest.name(),
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Validate a raw manifest into the application type.
    pub fn build(raw: FileManifest, fallback_name: &str) -> Result<Manifest, ManifestError> {
        let declarations = raw
            .params
            .into_iter()
            .map(Self::declaration)
            .collect::<Result<Vec<_>, _>>()?;
        let name = raw.name.unwrap_or_else(|| fallback_name.to_string());
        Ok(Manifest::new(name, declarations)?)
    }

    fn declaration(raw: FileParamDecl) -> Result<ParameterDeclaration, ManifestError> {
        let name = ParamName::new(raw.name)?;
        let default = match raw.default {
            Some(value) => value,
            None if raw.kind.is_sequence() => ParamValue::List(Vec::new()),
            None => return Err(ManifestError::MissingDefault(name.into_string())),
        };
        let declaration = ParameterDeclaration::new(name, raw.kind, default)?;
        Ok(match raw.description {
            Some(description) => declaration.with_description(description),
            None => declaration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperconf_domain::ParamShape;

    fn write(dir: &tempfile::TempDir, file: &str, content: &str) -> PathBuf {
        let path = dir.path().join(file);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_toml_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "training.toml",
            r#"
[[param]]
name = "stream"
kind = "bool"
default = true
description = "Stream batches"

[[param]]
name = "layer_trainable"
kind = "multi_bool"
"#,
        );

        let manifest = ManifestLoader::load(&path).unwrap();
        assert_eq!(manifest.name(), "training");
        assert_eq!(manifest.len(), 2);
        let stream = manifest.get("stream").unwrap();
        assert_eq!(stream.description(), Some("Stream batches"));
        let flags = manifest.get("layer_trainable").unwrap();
        assert_eq!(flags.shape(), ParamShape::MultiBool);
        assert_eq!(flags.default_value(), &ParamValue::List(vec![]));
    }

    #[test]
    fn test_load_json_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "model.json",
            r#"{"name": "model", "param": [{"name": "lr", "kind": "float", "default": 1}]}"#,
        );
        let manifest = ManifestLoader::load(&path).unwrap();
        assert_eq!(manifest.name(), "model");
        assert_eq!(
            manifest.get("lr").unwrap().default_value(),
            &ParamValue::Float(1.0)
        );
    }

    #[test]
    fn test_bad_default_is_type_mismatch() {
        let raw: FileManifest = toml::from_str(
            r#"
[[param]]
name = "layer_trainable"
kind = "multi_bool"
default = [1, 0]
"#,
        )
        .unwrap();
        let err = ManifestLoader::build(raw, "x").unwrap_err();
        assert!(matches!(err, ManifestError::Param(e) if e.is_type_mismatch()));
    }

    #[test]
    fn test_non_finite_default_is_rejected() {
        for literal in ["nan", "inf", "-inf"] {
            let raw: FileManifest = toml::from_str(&format!(
                "[[param]]\nname = \"lr\"\nkind = \"float\"\ndefault = {}\n",
                literal
            ))
            .unwrap();
            let err = ManifestLoader::build(raw, "x").unwrap_err();
            assert!(
                matches!(&err, ManifestError::Param(e) if e.is_type_mismatch()),
                "{} should be rejected",
                literal
            );
        }
    }

    #[test]
    fn test_scalar_without_default() {
        let raw: FileManifest = toml::from_str(
            r#"
[[param]]
name = "stream"
kind = "bool"
"#,
        )
        .unwrap();
        assert!(matches!(
            ManifestLoader::build(raw, "x"),
            Err(ManifestError::MissingDefault(name)) if name == "stream"
        ));
    }

    #[test]
    fn test_duplicate_names() {
        let raw: FileManifest = toml::from_str(
            r#"
[[param]]
name = "stream"
kind = "bool"
default = true

[[param]]
name = "stream"
kind = "bool"
default = false
"#,
        )
        .unwrap();
        assert!(matches!(
            ManifestLoader::build(raw, "x"),
            Err(ManifestError::Param(ParamError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ManifestLoader::load(Path::new("/nonexistent/manifest.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
