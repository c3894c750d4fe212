//! Flattening nested data into dotted override names.

use hyperconf_application::OverrideSourceError;
use hyperconf_domain::{OverrideMapping, ParamValue};
use serde_json::Value;

/// Flatten a JSON-like document into an override mapping.
///
/// Nested tables become dotted names (`{"optimizer": {"lr": 0.1}}` becomes
/// `optimizer.lr`). Values keep their data type; `null`, and tables inside
/// lists, are rejected.
pub fn flatten_document(
    origin: &str,
    document: Value,
) -> Result<OverrideMapping, OverrideSourceError> {
    let Value::Object(map) = document else {
        return Err(OverrideSourceError::Unreadable {
            origin: origin.to_string(),
            message: "top level must be a table of name = value pairs".to_string(),
        });
    };

    let mut overrides = OverrideMapping::new();
    for (key, value) in map {
        flatten_into(origin, key, value, &mut overrides)?;
    }
    Ok(overrides)
}

fn flatten_into(
    origin: &str,
    name: String,
    value: Value,
    overrides: &mut OverrideMapping,
) -> Result<(), OverrideSourceError> {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(origin, format!("{}.{}", name, key), nested, overrides)?;
            }
        }
        other => {
            let value =
                to_param_value(&other).map_err(|message| OverrideSourceError::InvalidValue {
                    origin: origin.to_string(),
                    name: name.clone(),
                    message,
                })?;
            overrides.insert(name, value);
        }
    }
    Ok(())
}

/// Convert a single JSON value (no tables) into a [`ParamValue`].
pub fn to_param_value(value: &Value) -> Result<ParamValue, String> {
    match value {
        Value::Bool(b) => Ok(ParamValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ParamValue::Int(i))
            } else if n.is_u64() {
                Err(format!("integer {} is out of range", n))
            } else {
                n.as_f64()
                    .map(ParamValue::Float)
                    .ok_or_else(|| format!("unsupported number {}", n))
            }
        }
        Value::String(s) => Ok(ParamValue::Text(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(to_param_value)
            .collect::<Result<Vec<_>, _>>()
            .map(ParamValue::List),
        Value::Null => Err("null is not a valid value".to_string()),
        Value::Object(_) => Err("tables are not allowed inside lists".to_string()),
    }
}
