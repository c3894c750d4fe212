//! Tagged parameter value
//!
//! [`ParamValue`] is the dynamically-typed form every default, override and
//! snapshot entry passes through. There is no implicit conversion between
//! variants: `1` is an `Int`, `"true"` is a `Text`, and neither is a `Bool`.

use serde::{Deserialize, Serialize};

/// A dynamically-typed parameter value.
///
/// Serialized untagged, so the plain data form is what you would write by
/// hand in JSON or TOML: `true`, `3`, `0.5`, `"adam"`, `[true, false]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Short type label used in error messages (`bool`, `int`, `list<bool>`, ...).
    pub fn kind_name(&self) -> String {
        match self {
            ParamValue::Bool(_) => "bool".to_string(),
            ParamValue::Int(_) => "int".to_string(),
            ParamValue::Float(_) => "float".to_string(),
            ParamValue::Text(_) => "text".to_string(),
            ParamValue::List(items) => {
                let Some(first) = items.first() else {
                    return "list".to_string();
                };
                let element = first.kind_name();
                if items.iter().all(|item| item.kind_name() == element) {
                    format!("list<{}>", element)
                } else {
                    "list<mixed>".to_string()
                }
            }
        }
    }

    /// Type label followed by the value itself, e.g. `text "true"`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.kind_name(), self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{:?}", x),
            ParamValue::Text(s) => write!(f, "{:?}", s),
            ParamValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_json_types_apart() {
        let value: ParamValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, ParamValue::Bool(true));

        let value: ParamValue = serde_json::from_str("1").unwrap();
        assert_eq!(value, ParamValue::Int(1));

        let value: ParamValue = serde_json::from_str("\"true\"").unwrap();
        assert_eq!(value, ParamValue::Text("true".to_string()));

        let value: ParamValue = serde_json::from_str("0.25").unwrap();
        assert_eq!(value, ParamValue::Float(0.25));
    }

    #[test]
    fn test_deserialize_list() {
        let value: ParamValue = serde_json::from_str("[1, 0]").unwrap();
        assert_eq!(
            value,
            ParamValue::List(vec![ParamValue::Int(1), ParamValue::Int(0)])
        );
    }

    #[test]
    fn test_deserialize_rejects_null() {
        assert!(serde_json::from_str::<ParamValue>("null").is_err());
    }

    #[test]
    fn test_serialize_plain_data() {
        let value = ParamValue::from(vec![false, true, true]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[false,true,true]");
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(ParamValue::from(true).kind_name(), "bool");
        assert_eq!(ParamValue::from(vec![1i64, 0]).kind_name(), "list<int>");
        assert_eq!(ParamValue::List(vec![]).kind_name(), "list");
        let mixed = ParamValue::List(vec![true.into(), "false".into()]);
        assert_eq!(mixed.kind_name(), "list<mixed>");
    }

    #[test]
    fn test_describe() {
        assert_eq!(ParamValue::from("true").describe(), "text \"true\"");
        assert_eq!(ParamValue::from(1.0).describe(), "float 1.0");
        assert_eq!(
            ParamValue::from(vec![1i64, 0]).describe(),
            "list<int> [1, 0]"
        );
    }
}
