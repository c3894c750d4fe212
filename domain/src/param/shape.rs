//! Declared parameter shapes

use super::value::ParamValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The value shape a parameter is declared with.
///
/// Scalar shapes accept exactly one tagged variant; `multi_*` shapes accept a
/// list whose every element matches the scalar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamShape {
    Bool,
    MultiBool,
    Int,
    MultiInt,
    Float,
    MultiFloat,
    Text,
    MultiText,
}

impl ParamShape {
    pub const ALL: [ParamShape; 8] = [
        ParamShape::Bool,
        ParamShape::MultiBool,
        ParamShape::Int,
        ParamShape::MultiInt,
        ParamShape::Float,
        ParamShape::MultiFloat,
        ParamShape::Text,
        ParamShape::MultiText,
    ];

    /// Identifier used in manifests (`bool`, `multi_bool`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamShape::Bool => "bool",
            ParamShape::MultiBool => "multi_bool",
            ParamShape::Int => "int",
            ParamShape::MultiInt => "multi_int",
            ParamShape::Float => "float",
            ParamShape::MultiFloat => "multi_float",
            ParamShape::Text => "text",
            ParamShape::MultiText => "multi_text",
        }
    }

    /// Type label matching [`ParamValue::kind_name`] for accepted values.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamShape::Bool => "bool",
            ParamShape::MultiBool => "list<bool>",
            ParamShape::Int => "int",
            ParamShape::MultiInt => "list<int>",
            ParamShape::Float => "float",
            ParamShape::MultiFloat => "list<float>",
            ParamShape::Text => "text",
            ParamShape::MultiText => "list<text>",
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            ParamShape::MultiBool
                | ParamShape::MultiInt
                | ParamShape::MultiFloat
                | ParamShape::MultiText
        )
    }

    /// Element shape of a sequence; scalar shapes return themselves.
    pub fn element(&self) -> ParamShape {
        match self {
            ParamShape::MultiBool => ParamShape::Bool,
            ParamShape::MultiInt => ParamShape::Int,
            ParamShape::MultiFloat => ParamShape::Float,
            ParamShape::MultiText => ParamShape::Text,
            scalar => *scalar,
        }
    }

    /// Check `value` against this shape, returning the value in canonical form.
    ///
    /// The only widening performed is `Int` to `Float` for float shapes.
    /// NaN and infinities are rejected; they have no plain-data form.
    /// Returns `None` on any mismatch, including a single bad list element.
    pub fn conform(&self, value: &ParamValue) -> Option<ParamValue> {
        if self.is_sequence() {
            let element = self.element();
            let items = value.as_list()?;
            return items
                .iter()
                .map(|item| element.conform(item))
                .collect::<Option<Vec<_>>>()
                .map(ParamValue::List);
        }

        match (self, value) {
            (ParamShape::Bool, ParamValue::Bool(_))
            | (ParamShape::Int, ParamValue::Int(_))
            | (ParamShape::Text, ParamValue::Text(_)) => Some(value.clone()),
            (ParamShape::Float, ParamValue::Float(x)) if x.is_finite() => Some(value.clone()),
            (ParamShape::Float, ParamValue::Int(n)) => Some(ParamValue::Float(*n as f64)),
            _ => None,
        }
    }

    pub fn accepts(&self, value: &ParamValue) -> bool {
        self.conform(value).is_some()
    }
}

impl std::fmt::Display for ParamShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for ParamShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = ParamShape::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown parameter kind '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
