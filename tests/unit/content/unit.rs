use super::*;
use crate::content::blocks::{BlockKind, BlockPayload};
use serde_json::json;

fn unit(v: Value) -> ContentUnit<BlockKind> {
    ContentUnit::from_raw(serde_json::from_value(v).unwrap())
}

#[test]
fn raw_unit_accepts_numeric_ids_and_loose_fields() {
    let raw: RawUnit = serde_json::from_value(json!({
        "id": 17,
        "type": "text",
        "order": "3",
        "isActive": "false",
        "content": {"content": "Halo"}
    }))
    .unwrap();
    assert_eq!(raw.id, UnitId::from("17"));
    assert_eq!(raw.order, 3);
    assert!(!raw.is_active);
    assert_eq!(raw.payload, json!({"content": "Halo"}));
}

#[test]
fn raw_unit_defaults() {
    let raw: RawUnit = serde_json::from_value(json!({"id": "a", "type": "text"})).unwrap();
    assert_eq!(raw.order, 0);
    assert!(raw.is_active);
    assert_eq!(raw.payload, Value::Null);
}

#[test]
fn string_encoded_payload_is_decoded_once() {
    let u = unit(json!({
        "id": "t1",
        "type": "text",
        "payload": "{\"title\":\"Judul\",\"content\":\"Isi\"}"
    }));
    assert_eq!(u.payload_status(), &PayloadStatus::Decoded);
    let UnitBody::Ready(BlockPayload::Text(p)) = u.body() else {
        panic!("expected ready text payload");
    };
    assert_eq!(p.heading.title.as_deref(), Some("Judul"));
}

#[test]
fn malformed_payload_marks_known_unit_broken() {
    let u = unit(json!({"id": "b1", "type": "text", "payload": "{not valid json"}));
    assert!(u.payload_status().is_failure());
    assert!(matches!(
        u.body(),
        UnitBody::Broken(RenderError::MalformedPayload(_))
    ));
}

#[test]
fn unknown_tag_is_not_broken() {
    let u = unit(json!({"id": "x", "type": "unsupported-x", "payload": "{not valid json"}));
    assert_eq!(u.kind(), None);
    assert!(matches!(u.body(), UnitBody::Unknown));
}

#[test]
fn legacy_scalar_payload_still_renders_as_text() {
    let u = unit(json!({"id": "l", "type": "text", "payload": "Selamat datang"}));
    let UnitBody::Ready(BlockPayload::Text(p)) = u.body() else {
        panic!("expected ready text payload");
    };
    assert_eq!(p.content.as_deref(), Some("Selamat datang"));
}

#[test]
fn payload_under_two_keys_keeps_the_unit() {
    let u = unit(json!({
        "id": "dup",
        "type": "text",
        "payload": {"content": "Utama"},
        "content": "legacy"
    }));
    let UnitBody::Ready(BlockPayload::Text(p)) = u.body() else {
        panic!("expected ready text payload");
    };
    assert_eq!(p.content.as_deref(), Some("Utama"));

    let raw: RawUnit =
        serde_json::from_value(json!({"id": 1, "payload": null, "data": {"a": 1}})).unwrap();
    assert_eq!(raw.payload, json!({"a": 1}));
}

#[test]
fn unusable_order_falls_back_to_zero() {
    let u = unit(json!({"id": "o", "type": "text", "order": "first", "payload": {}}));
    assert_eq!(u.order(), 0);
    assert!(matches!(u.body(), UnitBody::Ready(_)));

    let raw: RawUnit = serde_json::from_value(json!({"sortOrder": [1]})).unwrap();
    assert_eq!(raw.order, 0);
}

#[test]
fn unusable_activation_flag_keeps_the_unit_active() {
    let u = unit(json!({"id": "m", "type": "text", "isActive": "maybe", "payload": {}}));
    assert!(u.is_active());
    assert!(matches!(u.body(), UnitBody::Ready(_)));
}

#[test]
fn only_objects_are_units() {
    assert!(serde_json::from_value::<RawUnit>(json!(42)).is_err());
    assert!(serde_json::from_value::<RawUnit>(json!("text")).is_err());
    let raw: RawUnit = serde_json::from_value(json!({"id": {"nested": true}})).unwrap();
    assert_eq!(raw.id, UnitId::default());
    assert_eq!(raw.type_tag, "");
}

#[test]
fn encoded_array_payload_decodes_for_list_kinds() {
    let u = unit(json!({
        "id": "f",
        "type": "faq",
        "payload": "[{\"question\":\"Kapan?\",\"answer\":\"Besok\"}]"
    }));
    assert_eq!(u.payload_status(), &PayloadStatus::Decoded);
    let UnitBody::Ready(BlockPayload::Faq(p)) = u.body() else {
        panic!("expected ready faq payload, got {:?}", u.body());
    };
    assert_eq!(p.items[0].question.as_deref(), Some("Kapan?"));
}
