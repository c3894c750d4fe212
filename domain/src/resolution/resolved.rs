//! Per-parameter resolution results

use crate::param::{ParamName, ParamShape, ParamValue};
use serde::{Deserialize, Serialize};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The declared default was used
    Default,
    /// A caller-supplied override replaced the default
    Override,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::Override => "override",
        }
    }
}

/// One parameter after a resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParam {
    pub name: ParamName,
    pub shape: ParamShape,
    pub value: ParamValue,
    pub source: ValueSource,
}

impl ResolvedParam {
    pub fn is_overridden(&self) -> bool {
        self.source == ValueSource::Override
    }
}
