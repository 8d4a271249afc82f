use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::content::kind::{Taxonomy, lift_list};
use crate::payload::lenient;
use crate::payload::normalize::{NormalizedPayload, PayloadStatus, normalize};
use crate::render::failure::RenderError;

/// Opaque, stable unit identifier. Stored content uses both numeric and string ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl<'de> Deserialize<'de> for UnitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Int(i64),
            Num(f64),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(Repr::Str(s)) => Ok(Self(s)),
            Some(Repr::Int(n)) => Ok(Self(n.to_string())),
            Some(Repr::Num(n)) => Ok(Self(n.to_string())),
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Envelope keys, each list in precedence order.
const TYPE_KEYS: [&str; 4] = ["type", "blockType", "sectionType", "kind"];
const ORDER_KEYS: [&str; 2] = ["order", "sortOrder"];
const ACTIVE_KEYS: [&str; 2] = ["isActive", "is_active"];
const PAYLOAD_KEYS: [&str; 3] = ["payload", "content", "data"];

/// A content unit exactly as the content source delivers it.
///
/// Any JSON object is a unit. Envelope fields are read one at a time, so an odd `order` or
/// `isActive`, or a payload stored under two keys, never discards the unit.
#[derive(Clone, Debug, Default)]
pub struct RawUnit {
    pub id: UnitId,
    pub type_tag: String,
    pub order: i64,
    pub is_active: bool,
    pub payload: Value,
}

impl RawUnit {
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let id = map
            .remove("id")
            .and_then(|v| UnitId::deserialize(v).ok())
            .unwrap_or_default();
        let type_tag = take_first(&mut map, &TYPE_KEYS)
            .and_then(lenient::text_value)
            .unwrap_or_default();

        let order = match take_first(&mut map, &ORDER_KEYS) {
            None => 0,
            Some(v) => lenient::number_value(&v).map_or_else(
                || {
                    tracing::warn!(%id, order = %v, "unusable unit order; using 0");
                    0
                },
                |n| n as i64,
            ),
        };

        let is_active = match take_first(&mut map, &ACTIVE_KEYS) {
            None => true,
            Some(v) => lenient::flag_value(&v).unwrap_or_else(|| {
                tracing::warn!(
                    %id,
                    is_active = %v,
                    "unusable unit activation flag; keeping it active"
                );
                true
            }),
        };

        let payload = take_first(&mut map, &PAYLOAD_KEYS).unwrap_or(Value::Null);

        Self {
            id,
            type_tag,
            order,
            is_active,
            payload,
        }
    }
}

impl<'de> Deserialize<'de> for RawUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(D::Error::custom(format!(
                "expected a content unit object, got {other}"
            ))),
        }
    }
}

/// First non-null value among `keys`.
fn take_first(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .filter_map(|k| map.remove(*k))
        .find(|v| !v.is_null())
}

/// Outcome of decoding a unit's payload at the assembly boundary.
#[derive(Clone, Debug)]
pub enum UnitBody<P> {
    /// The type tag is not part of the taxonomy; the unit renders as nothing.
    Unknown,
    /// Payload decoded into its typed schema.
    Ready(P),
    /// Payload could not be used; the unit renders a visible fallback.
    Broken(RenderError),
}

/// One typed, ordered, optionally bilingual piece of page content.
///
/// Construction normalizes and decodes the payload once; units are immutable afterwards.
#[derive(Clone, Debug)]
pub struct ContentUnit<K: Taxonomy> {
    id: UnitId,
    type_tag: String,
    kind: Option<K>,
    order: i64,
    is_active: bool,
    status: PayloadStatus,
    body: UnitBody<K::Payload>,
}

impl<K: Taxonomy> ContentUnit<K> {
    pub fn from_raw(raw: RawUnit) -> Self {
        let kind = K::from_tag(&raw.type_tag);
        let NormalizedPayload { value, status } = normalize(raw.payload);

        let body = match kind {
            None => UnitBody::Unknown,
            Some(_) if status.is_failure() => {
                let reason = match &status {
                    PayloadStatus::Malformed { reason } => reason.clone(),
                    _ => String::new(),
                };
                UnitBody::Broken(RenderError::MalformedPayload(reason))
            }
            Some(k) => match k.decode(lift_list(value, k.list_field())) {
                Ok(p) => UnitBody::Ready(p),
                Err(e) => UnitBody::Broken(e),
            },
        };

        if let UnitBody::Broken(e) = &body {
            tracing::warn!(
                family = K::FAMILY,
                id = %raw.id,
                tag = %raw.type_tag,
                error = %e,
                "content unit payload is unusable"
            );
        }

        Self {
            id: raw.id,
            type_tag: raw.type_tag,
            kind,
            order: raw.order,
            is_active: raw.is_active,
            status,
            body,
        }
    }

    pub fn id(&self) -> &UnitId {
        &self.id
    }

    /// The type tag as authored (not canonicalized).
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn kind(&self) -> Option<K> {
        self.kind
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn payload_status(&self) -> &PayloadStatus {
        &self.status
    }

    pub fn body(&self) -> &UnitBody<K::Payload> {
        &self.body
    }

    pub(crate) fn groupable(&self) -> bool {
        self.kind.is_some_and(K::groupable)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/unit.rs"]
mod tests;
