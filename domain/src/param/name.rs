//! Parameter name value object

use crate::core::error::ParamError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// An explicit parameter identifier (Value Object)
///
/// One or more dot-separated segments, each starting with a letter or `_`
/// and continuing with letters, digits or `_`. Examples: `stream`,
/// `optimizer.lr`, `layer_trainable`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamName(String);

impl ParamName {
    /// Create a validated name.
    pub fn new(name: impl Into<String>) -> Result<Self, ParamError> {
        let name = name.into();
        if let Some(reason) = Self::violation(&name) {
            return Err(ParamError::InvalidName { name, reason });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Dot-separated segments of the name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    fn violation(name: &str) -> Option<&'static str> {
        if name.is_empty() {
            return Some("name cannot be empty");
        }
        for segment in name.split('.') {
            let mut chars = segment.chars();
            match chars.next() {
                None => return Some("empty segment between dots"),
                Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                    return Some("segments must start with a letter or '_'");
                }
                _ => {}
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Some("only letters, digits, '_' and '.' are allowed");
            }
        }
        None
    }
}

impl std::fmt::Display for ParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ParamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParamName {
    type Error = ParamError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ParamName::new(s)
    }
}

impl TryFrom<&str> for ParamName {
    type Error = ParamError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ParamName::new(s)
    }
}

impl From<ParamName> for String {
    fn from(name: ParamName) -> Self {
        name.0
    }
}
