//! Loose readers over raw JSON, following the runtime's coercion rules.

use serde_json::Value;

use crate::foundation::math::js_number;

/// JavaScript truthiness of a JSON value.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strictly numeric field, `None` for anything else.
pub fn number(v: &Value) -> Option<f64> {
    v.as_f64()
}

/// `+v || 0`: numeric coercion with `0` for anything non-numeric.
pub fn coerce_number(v: &Value) -> f64 {
    let x = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
    };
    if x.is_nan() { 0.0 } else { x }
}

pub fn field<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.as_object().and_then(|o| o.get(key))
}

pub fn field_number(v: &Value, key: &str) -> Option<f64> {
    field(v, key).and_then(number)
}

pub fn field_str<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    field(v, key).and_then(Value::as_str)
}

/// `String(v)` for values that end up in attributes. `None` for null and
/// objects, which have no useful attribute form.
pub fn js_string(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Object(_) => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => n.as_f64().map(js_number),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|i| js_string(i).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/value.rs"]
mod tests;
