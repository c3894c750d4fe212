//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use hyperconf_application::{Manifest, ResolveManifestOutput};

/// Formatter that emits machine-readable JSON.
///
/// Resolved configurations are printed as a flat snapshot mapping, which can
/// be fed back through `--values` to reproduce the same configuration.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolved(&self, output: &ResolveManifestOutput, only: &[String]) -> String {
        let snapshot = if only.is_empty() {
            output.snapshot.clone()
        } else {
            output.snapshot.subset(only.iter().map(String::as_str))
        };
        serde_json::to_string_pretty(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_manifest(&self, manifest: &Manifest) -> String {
        serde_json::to_string_pretty(manifest.declarations()).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperconf_domain::{ParamName, ParamValue, ParameterDeclaration, ResolvedSnapshot};

    #[test]
    fn test_resolved_is_flat_snapshot() {
        let snapshot: ResolvedSnapshot = [
            (ParamName::new("stream").unwrap(), ParamValue::Bool(false)),
            (
                ParamName::new("layer_trainable").unwrap(),
                ParamValue::from(vec![true, false]),
            ),
        ]
        .into_iter()
        .collect();
        let output = ResolveManifestOutput {
            config: "training".to_string(),
            params: Vec::new(),
            snapshot,
            saved_to: None,
        };

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_resolved(&output, &[])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"layer_trainable": [true, false], "stream": false})
        );

        let only: serde_json::Value = serde_json::from_str(
            &JsonFormatter.format_resolved(&output, &["stream".to_string()]),
        )
        .unwrap();
        assert_eq!(only, serde_json::json!({"stream": false}));
    }

    #[test]
    fn test_manifest_lists_declarations() {
        let manifest = Manifest::new(
            "training",
            vec![ParameterDeclaration::typed(
                ParamName::new("stream").unwrap(),
                true,
            )],
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_manifest(&manifest)).unwrap();
        assert_eq!(json[0]["name"], "stream");
        assert_eq!(json[0]["shape"], "bool");
        assert_eq!(json[0]["default"], true);
    }
}
