//! Override source adapters: files, environment, command-line assignments.

use super::flatten::{flatten_document, to_param_value};
use crate::file_format::is_json_path;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml},
};
use hyperconf_application::{OverrideSource, OverrideSourceError};
use hyperconf_domain::{OverrideMapping, ParamValue};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides read from a TOML or JSON file.
///
/// `.json` files are parsed as JSON, everything else as TOML.
#[derive(Debug, Clone)]
pub struct FileOverrides {
    path: PathBuf,
}

impl FileOverrides {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OverrideSource for FileOverrides {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<OverrideMapping, OverrideSourceError> {
        if !self.path.is_file() {
            return Err(OverrideSourceError::Unreadable {
                origin: self.origin(),
                message: "file not found".to_string(),
            });
        }

        let figment = if is_json_path(&self.path) {
            Figment::from(Json::file(&self.path))
        } else {
            Figment::from(Toml::file(&self.path))
        };

        extract(&self.origin(), figment)
    }
}

/// Overrides read from environment variables under a prefix.
///
/// `HYPERCONF_VALUE_STREAM=false` yields `stream = false`;
/// `HYPERCONF_VALUE_OPTIMIZER__LR=0.1` yields `optimizer.lr = 0.1`.
/// Values are parsed as data, so `true`, `3` and `[true, false]` keep their
/// types.
#[derive(Debug, Clone)]
pub struct EnvOverrides {
    prefix: String,
}

impl EnvOverrides {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl OverrideSource for EnvOverrides {
    fn origin(&self) -> String {
        format!("environment ({}*)", self.prefix)
    }

    fn load(&self) -> Result<OverrideMapping, OverrideSourceError> {
        let figment = Figment::from(Env::prefixed(&self.prefix).split("__"));
        extract(&self.origin(), figment)
    }
}

fn extract(origin: &str, figment: Figment) -> Result<OverrideMapping, OverrideSourceError> {
    let document: serde_json::Value =
        figment
            .extract()
            .map_err(|e| OverrideSourceError::Unreadable {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
    let overrides = flatten_document(origin, document)?;
    debug!("Read {} override(s) from {}", overrides.len(), origin);
    Ok(overrides)
}

/// Parse `name=value` assignments from the command line.
///
/// The value is parsed as JSON (`true`, `3`, `0.5`, `[true, false]`,
/// `"quoted text"`); anything that is not valid JSON is taken as plain text.
/// So `stream=true` is a boolean while `stream='"true"'` is text.
pub fn parse_assignments<S: AsRef<str>>(
    assignments: &[S],
) -> Result<OverrideMapping, OverrideSourceError> {
    let mut overrides = OverrideMapping::new();
    for assignment in assignments {
        let (name, value) = parse_assignment(assignment.as_ref())?;
        overrides.insert(name, value);
    }
    Ok(overrides)
}

fn parse_assignment(assignment: &str) -> Result<(String, ParamValue), OverrideSourceError> {
    let invalid = |name: &str, message: String| OverrideSourceError::InvalidValue {
        origin: "command line".to_string(),
        name: name.to_string(),
        message,
    };

    let Some((name, raw)) = assignment.split_once('=') else {
        return Err(invalid(assignment, "expected NAME=VALUE".to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid(assignment, "missing parameter name".to_string()));
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => to_param_value(&json).map_err(|message| invalid(name, message))?,
        Err(_) => ParamValue::Text(raw.to_string()),
    };
    Ok((name.to_string(), value))
}
