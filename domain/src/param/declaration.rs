//! Parameter declaration entity

use super::{ParamName, ParamShape, ParamType, ParamValue};
use crate::core::error::ParamError;
use crate::resolution::ValueSource;
use serde::Serialize;

/// A named configuration slot with a default value and a required shape.
///
/// The default is checked against the shape on construction, so a
/// declaration that exists is always internally consistent. Declarations
/// are read, never mutated, while overrides are applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDeclaration {
    name: ParamName,
    shape: ParamShape,
    default: ParamValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ParameterDeclaration {
    /// Create a declaration from a dynamically-typed default.
    ///
    /// Fails with [`ParamError::TypeMismatch`] when `default` does not match
    /// `shape` (e.g. `"true"` or `1` for a `bool`).
    pub fn new(
        name: ParamName,
        shape: ParamShape,
        default: ParamValue,
    ) -> Result<Self, ParamError> {
        let default = shape
            .conform(&default)
            .ok_or_else(|| ParamError::type_mismatch(name.as_str(), shape, default))?;
        Ok(Self {
            name,
            shape,
            default,
            description: None,
        })
    }

    /// Create a declaration from a statically-typed default.
    pub fn typed<T: ParamType>(name: ParamName, default: T) -> Self {
        Self {
            name,
            shape: T::SHAPE,
            default: default.into_value(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &ParamName {
        &self.name
    }

    pub fn shape(&self) -> ParamShape {
        self.shape
    }

    pub fn default_value(&self) -> &ParamValue {
        &self.default
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Resolve against an optional override.
    ///
    /// Without an override the default is returned; with one, the override
    /// must match the declared shape.
    pub fn resolve(
        &self,
        override_value: Option<&ParamValue>,
    ) -> Result<(ParamValue, ValueSource), ParamError> {
        let Some(value) = override_value else {
            return Ok((self.default.clone(), ValueSource::Default));
        };
        let value = self.shape.conform(value).ok_or_else(|| {
            ParamError::type_mismatch(self.name.as_str(), self.shape, value.clone())
        })?;
        Ok((value, ValueSource::Override))
    }
}
