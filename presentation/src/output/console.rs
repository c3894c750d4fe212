//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use hyperconf_application::{Manifest, ResolveManifestOutput};
use hyperconf_domain::{ResolvedParam, ValueSource};

/// Formatter for human-readable console output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a resolved configuration as an aligned table
    pub fn format(output: &ResolveManifestOutput, only: &[String]) -> String {
        let params: Vec<&ResolvedParam> = output
            .params
            .iter()
            .filter(|p| only.is_empty() || only.iter().any(|n| n == p.name.as_str()))
            .collect();

        let mut out = String::new();
        out.push_str(&Self::header(&output.config));
        out.push('\n');

        let width = params
            .iter()
            .map(|p| p.name.as_str().len())
            .max()
            .unwrap_or(0);

        for param in &params {
            out.push_str(&Self::param_line(param, width));
            out.push('\n');
        }

        out.push('\n');
        let overridden = params.iter().filter(|p| p.is_overridden()).count();
        out.push_str(&Self::footer(&format!(
            "{} parameter(s), {} overridden",
            params.len(),
            overridden
        )));

        if let Some(location) = &output.saved_to {
            out.push_str(&format!("\n{} {}", "Snapshot saved to".dimmed(), location));
        }

        out
    }

    /// Format a manifest's declarations with their defaults
    pub fn format_declarations(manifest: &Manifest) -> String {
        let mut out = String::new();
        out.push_str(&Self::header(manifest.name()));
        out.push('\n');

        for decl in manifest.declarations() {
            out.push_str(&format!(
                "{} {} = {}\n",
                decl.name().as_str().bold(),
                format!("<{}>", decl.shape()).dimmed(),
                decl.default_value()
            ));
            if let Some(description) = decl.description() {
                out.push_str(&Self::indent(description, 4));
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&Self::footer(&format!(
            "{} parameter(s) declared",
            manifest.len()
        )));
        out
    }

    /// Format an error for display
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }

    fn param_line(param: &ResolvedParam, width: usize) -> String {
        let source = match param.source {
            ValueSource::Override => param.source.as_str().yellow(),
            ValueSource::Default => param.source.as_str().dimmed(),
        };
        format!(
            "  {:<width$}  {}  {} {}",
            param.name.as_str(),
            param.value.to_string().green(),
            format!("<{}>", param.shape).dimmed(),
            source,
            width = width
        )
    }

    fn header(title: &str) -> String {
        format!("{} {}", "Configuration:".cyan().bold(), title.bold())
    }

    fn footer(text: &str) -> String {
        text.dimmed().to_string()
    }

    fn indent(text: &str, spaces: usize) -> String {
        let pad = " ".repeat(spaces);
        text.lines()
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_resolved(&self, output: &ResolveManifestOutput, only: &[String]) -> String {
        ConsoleFormatter::format(output, only)
    }

    fn format_manifest(&self, manifest: &Manifest) -> String {
        ConsoleFormatter::format_declarations(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperconf_domain::{ParamName, ParamShape, ParamValue, ParameterDeclaration};

    fn resolved() -> ResolveManifestOutput {
        let params = vec![
            ResolvedParam {
                name: ParamName::new("stream").unwrap(),
                shape: ParamShape::Bool,
                value: ParamValue::Bool(false),
                source: ValueSource::Override,
            },
            ResolvedParam {
                name: ParamName::new("layer_trainable").unwrap(),
                shape: ParamShape::MultiBool,
                value: ParamValue::from(vec![true, true, false]),
                source: ValueSource::Default,
            },
        ];
        let snapshot = params.iter().collect();
        ResolveManifestOutput {
            config: "training".to_string(),
            params,
            snapshot,
            saved_to: Some("run.json".to_string()),
        }
    }

    #[test]
    fn test_format_lists_every_param() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&resolved(), &[]);

        assert!(text.contains("Configuration: training"));
        assert!(text.contains("stream"));
        assert!(text.contains("layer_trainable"));
        assert!(text.contains("<list<bool>>"));
        assert!(text.contains("2 parameter(s), 1 overridden"));
        assert!(text.contains("Snapshot saved to run.json"));
    }

    #[test]
    fn test_format_only_filters_rows() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&resolved(), &["layer_trainable".to_string()]);

        assert!(!text.contains("  stream"));
        assert!(text.contains("1 parameter(s), 0 overridden"));
    }

    #[test]
    fn test_format_declarations_includes_descriptions() {
        colored::control::set_override(false);
        let manifest = Manifest::new(
            "training",
            vec![
                ParameterDeclaration::typed(ParamName::new("stream").unwrap(), true)
                    .with_description("Stream batches from disk"),
            ],
        )
        .unwrap();

        let text = ConsoleFormatter::format_declarations(&manifest);
        assert!(text.contains("stream <bool> = true"));
        assert!(text.contains("    Stream batches from disk"));
        assert!(text.contains("1 parameter(s) declared"));
    }

    #[test]
    fn test_indent_multiline() {
        assert_eq!(ConsoleFormatter::indent("a\nb", 2), "  a\n  b");
    }
}
