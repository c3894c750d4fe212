//! Resolved snapshot value object

use super::{OverrideMapping, ResolvedParam};
use crate::core::error::ParamError;
use crate::param::{ParamName, ParamType, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The output of one resolution pass: every declared name and its value.
///
/// Immutable once captured. Serializes as a plain mapping, and
/// [`ResolvedSnapshot::into_overrides`] turns it back into an
/// [`OverrideMapping`] that reproduces the same configuration when replayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedSnapshot {
    values: BTreeMap<ParamName, ParamValue>,
}

impl ResolvedSnapshot {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Typed lookup.
    ///
    /// Fails with [`ParamError::UndeclaredParameter`] for unknown names and
    /// [`ParamError::TypeMismatch`] when the stored value is not a `T`.
    pub fn value<T: ParamType>(&self, name: &str) -> Result<T, ParamError> {
        let value = self
            .get(name)
            .ok_or_else(|| ParamError::UndeclaredParameter(name.to_string()))?;
        T::SHAPE
            .conform(value)
            .and_then(T::from_value)
            .ok_or_else(|| ParamError::type_mismatch(name, T::SHAPE, value.clone()))
    }

    pub fn bool(&self, name: &str) -> Result<bool, ParamError> {
        self.value(name)
    }

    pub fn multi_bool(&self, name: &str) -> Result<Vec<bool>, ParamError> {
        self.value(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &ParamName> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamName, &ParamValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keep only the named parameters (unknown names are ignored).
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(|name| self.values.get_key_value(name))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Replayable override mapping with the same entries.
    pub fn to_overrides(&self) -> OverrideMapping {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.clone()))
            .collect()
    }

    pub fn into_overrides(self) -> OverrideMapping {
        self.values
            .into_iter()
            .map(|(k, v)| (k.into_string(), v))
            .collect()
    }
}

impl FromIterator<(ParamName, ParamValue)> for ResolvedSnapshot {
    fn from_iter<I: IntoIterator<Item = (ParamName, ParamValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a ResolvedParam> for ResolvedSnapshot {
    fn from_iter<I: IntoIterator<Item = &'a ResolvedParam>>(iter: I) -> Self {
        iter.into_iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

impl From<ResolvedSnapshot> for OverrideMapping {
    fn from(snapshot: ResolvedSnapshot) -> Self {
        snapshot.into_overrides()
    }
}
