//! Output format value object

use serde::{Deserialize, Serialize};

/// How a resolved configuration is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table with value sources (default)
    #[default]
    Text,
    /// Snapshot as JSON
    Json,
}
