//! `deserialize_with` helpers for payload sub-fields whose shape drifted over time.
//!
//! Authored data mixes representations per field (arrays vs. JSON strings, numbers vs. numeric
//! strings), so each helper accepts every shape seen in stored content.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::payload::normalize::normalize_list;

/// A list of `T`, tolerant of every shape [`normalize_list`] accepts.
pub fn seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(d)?;
    normalize_list(raw)
        .into_iter()
        .enumerate()
        .map(|(i, v)| serde_json::from_value(v).map_err(|e| D::Error::custom(format!("[{i}]: {e}"))))
        .collect()
}

/// A list of strings; scalar entries are stringified and blank entries dropped.
pub fn seq_text<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(d)?;
    Ok(normalize_list(raw)
        .into_iter()
        .filter_map(text_value)
        .filter(|s| !s.trim().is_empty())
        .collect())
}

/// Optional text that may arrive as a string or a number (`"2024"` / `2024`).
pub fn opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(d)?;
    Ok(raw.and_then(text_value))
}

/// Optional number that may arrive as a JSON number or a numeric string.
///
/// Blank strings are treated as absent; anything else unparseable is an error.
pub fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => number_value(&v)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a number, got {v}"))),
    }
}

/// Optional non-negative integer, via [`opt_f64`] (fractions are truncated).
pub fn opt_usize<'de, D>(d: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64(d)?.filter(|n| *n >= 0.0).map(|n| n as usize))
}

/// Boolean flag tolerant of `1`/`0` and `"true"`/`"false"`; absent means `true`.
pub fn flag_default_true<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(true),
        Some(v) => flag_value(&v)
            .ok_or_else(|| D::Error::custom(format!("expected a boolean, got {v}"))),
    }
}

/// A JSON number or numeric string as `f64`.
pub(crate) fn number_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// A flag as a bool, a number, or one of `true/false`, `1/0`, `yes/no` (blank is `true`).
pub(crate) fn flag_value(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn default_true() -> bool {
    true
}

/// A scalar as text; arrays, objects and `null` have none.
pub(crate) fn text_value(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/lenient.rs"]
mod tests;
