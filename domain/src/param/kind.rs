//! Rust types that can be declared as parameters
//!
//! [`ParamType`] maps a concrete Rust type onto a [`ParamShape`] and converts
//! between it and [`ParamValue`]. Typed declarations go through it; the
//! dynamic path (manifests) works on [`ParamValue`] directly.

use super::{ParamShape, ParamValue};

/// A Rust type usable as a parameter value.
pub trait ParamType: Sized {
    /// Shape this type is declared with.
    const SHAPE: ParamShape;

    fn into_value(self) -> ParamValue;

    /// Extract from a value already conformed to [`Self::SHAPE`].
    fn from_value(value: ParamValue) -> Option<Self>;
}

/// A scalar parameter type whose `Vec` is the matching `multi_*` shape.
pub trait ScalarParam: ParamType {
    const SEQUENCE: ParamShape;
}

impl ParamType for bool {
    const SHAPE: ParamShape = ParamShape::Bool;

    fn into_value(self) -> ParamValue {
        ParamValue::Bool(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl ParamType for i64 {
    const SHAPE: ParamShape = ParamShape::Int;

    fn into_value(self) -> ParamValue {
        ParamValue::Int(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl ParamType for f64 {
    const SHAPE: ParamShape = ParamShape::Float;

    fn into_value(self) -> ParamValue {
        ParamValue::Float(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Float(x) => Some(x),
            ParamValue::Int(n) => Some(n as f64),
            _ => None,
        }
    }
}

impl ParamType for String {
    const SHAPE: ParamShape = ParamShape::Text;

    fn into_value(self) -> ParamValue {
        ParamValue::Text(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl ScalarParam for bool {
    const SEQUENCE: ParamShape = ParamShape::MultiBool;
}

impl ScalarParam for i64 {
    const SEQUENCE: ParamShape = ParamShape::MultiInt;
}

impl ScalarParam for f64 {
    const SEQUENCE: ParamShape = ParamShape::MultiFloat;
}

impl ScalarParam for String {
    const SEQUENCE: ParamShape = ParamShape::MultiText;
}

impl<T: ScalarParam> ParamType for Vec<T> {
    const SHAPE: ParamShape = T::SEQUENCE;

    fn into_value(self) -> ParamValue {
        ParamValue::List(self.into_iter().map(ParamType::into_value).collect())
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_shape_follows_element() {
        assert_eq!(<Vec<bool>>::SHAPE, ParamShape::MultiBool);
        assert_eq!(<Vec<String>>::SHAPE, ParamShape::MultiText);
    }

    #[test]
    fn test_vec_from_value_rejects_bad_element() {
        let value = ParamValue::List(vec![true.into(), 1i64.into()]);
        assert_eq!(<Vec<bool>>::from_value(value), None);
    }

    #[test]
    fn test_into_value_matches_shape() {
        let value = vec![true, false].into_value();
        assert!(ParamShape::MultiBool.accepts(&value));
        let value = "adam".to_string().into_value();
        assert!(ParamShape::Text.accepts(&value));
    }
}
