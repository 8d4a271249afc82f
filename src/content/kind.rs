use std::fmt;
use std::hash::Hash;

use serde_json::Value;

use crate::content::payloads::HeroPayload;
use crate::render::failure::RenderError;

/// A closed set of content type tags with a typed payload per tag.
///
/// Page blocks and homepage sections are two independent taxonomies that share this contract, so
/// the ordering pipeline and the dispatcher are written once.
pub trait Taxonomy: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Typed payload, one variant per tag.
    type Payload: Clone + fmt::Debug;

    /// Family name used in logs and markup (`"block"`, `"section"`).
    const FAMILY: &'static str;

    /// Parse an authored tag. `None` means the tag is unknown to this build.
    fn from_tag(tag: &str) -> Option<Self>;

    /// Canonical tag.
    fn tag(self) -> &'static str;

    /// Whether consecutive units of this kind are laid out as one group.
    fn groupable(self) -> bool {
        false
    }

    /// Decode a normalized payload into this kind's schema.
    fn decode(self, payload: Value) -> Result<Self::Payload, RenderError>;

    /// Field that receives a payload authored as a bare list, for list-shaped kinds.
    fn list_field(self) -> Option<&'static str> {
        None
    }

    /// The hero carousel inside `payload`, if this payload drives one.
    fn hero(_payload: &Self::Payload) -> Option<&HeroPayload> {
        None
    }
}

/// Canonical lookup form of an authored tag: trimmed, lowercase, `_`/space folded to `-`.
pub(crate) fn canonical_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Wrap a top-level array as `{field: array}` so list-shaped schemas accept a bare list.
pub(crate) fn lift_list(payload: Value, field: Option<&'static str>) -> Value {
    match (payload, field) {
        (Value::Array(items), Some(field)) => {
            let mut map = serde_json::Map::new();
            map.insert(field.to_owned(), Value::Array(items));
            Value::Object(map)
        }
        (payload, _) => payload,
    }
}

/// Shared `serde_json::from_value` wrapper mapping schema mismatches to [`RenderError::Decode`].
pub(crate) fn decode_as<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, RenderError> {
    serde_json::from_value(payload).map_err(|e| RenderError::Decode(e.to_string()))
}
