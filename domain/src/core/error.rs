//! Domain error types

use crate::param::{ParamShape, ParamValue};
use thiserror::Error;

/// Errors raised while declaring or resolving parameters.
///
/// Every variant aborts the resolution pass it occurs in; values are never
/// coerced to make a mismatch go away.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("type mismatch for '{name}': expected {expected}, found {}", .found.describe())]
    TypeMismatch {
        name: String,
        expected: ParamShape,
        found: ParamValue,
    },

    #[error("invalid parameter name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("parameter '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("overrides name undeclared parameters: {}", .0.join(", "))]
    UnknownOverride(Vec<String>),

    #[error("parameter '{0}' is not part of this configuration")]
    UndeclaredParameter(String),
}

impl ParamError {
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: ParamShape,
        found: ParamValue,
    ) -> Self {
        ParamError::TypeMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ParamError::TypeMismatch { .. })
    }
}
