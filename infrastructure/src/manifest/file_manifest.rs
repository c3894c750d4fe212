//! Raw manifest data types
//!
//! A manifest declares a configuration's parameters as data:
//!
//! ```toml
//! name = "training"
//!
//! [[param]]
//! name = "stream"
//! kind = "bool"
//! default = true
//! description = "Stream batches from disk"
//!
//! [[param]]
//! name = "layer_trainable"
//! kind = "multi_bool"
//! default = [true, true, false]
//! ```

use hyperconf_domain::{ParamShape, ParamValue};
use serde::{Deserialize, Serialize};

/// One `[[param]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileParamDecl {
    /// Parameter name
    pub name: String,
    /// Declared shape (`bool`, `multi_bool`, `int`, ...)
    pub kind: ParamShape,
    /// Default value; may be omitted for `multi_*` kinds (empty list)
    #[serde(default)]
    pub default: Option<ParamValue>,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// Complete manifest file (raw TOML/JSON structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileManifest {
    /// Configuration name; defaults to the file stem
    #[serde(default)]
    pub name: Option<String>,
    /// Parameter declarations, in order
    #[serde(default, rename = "param")]
    pub params: Vec<FileParamDecl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_manifest() {
        let toml_str = r#"
name = "training"

[[param]]
name = "stream"
kind = "bool"
default = true

[[param]]
name = "layer_trainable"
kind = "multi_bool"
default = [true, true, false]
description = "Per-layer trainable flags"
"#;
        let manifest: FileManifest = toml::from_str(toml_str).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("training"));
        assert_eq!(manifest.params.len(), 2);
        assert_eq!(manifest.params[0].kind, ParamShape::Bool);
        assert_eq!(manifest.params[0].default, Some(ParamValue::Bool(true)));
        assert_eq!(
            manifest.params[1].default,
            Some(ParamValue::from(vec![true, true, false]))
        );
    }

    #[test]
    fn test_deserialize_keeps_wrong_default_type() {
        // Type checking happens when the declaration is built, not here
        let toml_str = r#"
[[param]]
name = "stream"
kind = "bool"
default = "true"
"#;
        let manifest: FileManifest = toml::from_str(toml_str).unwrap();
        assert_eq!(manifest.params[0].default, Some(ParamValue::Text("true".into())));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let toml_str = r#"
[[param]]
name = "optimizer"
kind = "select"
"#;
        assert!(toml::from_str::<FileManifest>(toml_str).is_err());
    }
}
