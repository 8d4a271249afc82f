use serde_json::{Map, Value};

/// How a raw payload was turned into its normalized form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadStatus {
    /// Already an object or array; passed through untouched.
    Structured,
    /// A JSON-encoded string that decoded to an object or array.
    Decoded,
    /// A legacy scalar (plain string, number, bool) wrapped as `{content: value}`.
    WrappedScalar,
    /// `null`, missing or blank; normalized to `{}`.
    Empty,
    /// A string that looks like JSON but does not decode. The value is the best-effort
    /// `{content: raw}` wrapper; renderers must treat the unit as broken.
    Malformed { reason: String },
}

impl PayloadStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Short name for logs and inspection output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Decoded => "decoded",
            Self::WrappedScalar => "wrapped-scalar",
            Self::Empty => "empty",
            Self::Malformed { .. } => "malformed",
        }
    }
}

/// A payload after normalization: always an object or array, plus how it got there.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPayload {
    pub value: Value,
    pub status: PayloadStatus,
}

impl NormalizedPayload {
    fn new(value: Value, status: PayloadStatus) -> Self {
        Self { value, status }
    }
}

/// Normalize a raw payload. Never fails; see [`PayloadStatus`] for the outcome.
pub fn normalize(raw: Value) -> NormalizedPayload {
    match raw {
        Value::Null => NormalizedPayload::new(empty_object(), PayloadStatus::Empty),
        v @ (Value::Object(_) | Value::Array(_)) => {
            NormalizedPayload::new(v, PayloadStatus::Structured)
        }
        v @ (Value::Bool(_) | Value::Number(_)) => {
            tracing::debug!(payload = %v, "wrapping legacy scalar payload");
            NormalizedPayload::new(wrap_content(v), PayloadStatus::WrappedScalar)
        }
        Value::String(s) => normalize_str(s),
    }
}

fn normalize_str(s: String) -> NormalizedPayload {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return NormalizedPayload::new(empty_object(), PayloadStatus::Empty);
    }

    if !looks_like_json(trimmed) {
        // Plain text and bare-scalar encodings ("42", "\"hi\"") are legacy content.
        tracing::debug!("wrapping legacy string payload");
        return NormalizedPayload::new(wrap_content(Value::String(s)), PayloadStatus::WrappedScalar);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(v @ (Value::Object(_) | Value::Array(_))) => {
            NormalizedPayload::new(v, PayloadStatus::Decoded)
        }
        Ok(_) => NormalizedPayload::new(wrap_content(Value::String(s)), PayloadStatus::WrappedScalar),
        Err(e) => {
            let reason = e.to_string();
            tracing::warn!(%reason, "payload string is not valid JSON");
            NormalizedPayload::new(
                wrap_content(Value::String(s)),
                PayloadStatus::Malformed { reason },
            )
        }
    }
}

/// Normalize a list-shaped sub-field.
///
/// Accepts an array, a JSON-encoded array, a single object (or JSON-encoded object), or a single
/// scalar. `null` and blank strings yield an empty list.
pub fn normalize_list(raw: Value) -> Vec<Value> {
    match raw {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Vec::new();
            }
            if looks_like_json(trimmed) {
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(Value::Array(items)) => return items,
                    Ok(v @ Value::Object(_)) => return vec![v],
                    Ok(_) => {}
                    Err(e) => tracing::debug!(error = %e, "list field is not valid JSON"),
                }
            }
            vec![Value::String(s)]
        }
        v => vec![v],
    }
}

fn looks_like_json(trimmed: &str) -> bool {
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn wrap_content(v: Value) -> Value {
    let mut m = Map::with_capacity(1);
    m.insert("content".to_owned(), v);
    Value::Object(m)
}

#[cfg(test)]
#[path = "../../tests/unit/payload/normalize.rs"]
mod tests;
