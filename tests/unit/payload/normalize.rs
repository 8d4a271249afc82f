use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn structured_values_pass_through() {
    let v = json!({"title": "Halo", "items": [1, 2]});
    let n = normalize(v.clone());
    assert_eq!(n.value, v);
    assert_eq!(n.status, PayloadStatus::Structured);

    let arr = json!([{"a": 1}]);
    assert_eq!(normalize(arr.clone()).value, arr);
}

#[test]
fn null_and_blank_become_empty_object() {
    for raw in [Value::Null, json!(""), json!("   ")] {
        let n = normalize(raw);
        assert_eq!(n.value, json!({}));
        assert_eq!(n.status, PayloadStatus::Empty);
    }
}

#[test]
fn json_strings_decode_once() {
    let n = normalize(json!(r#"{"title":"Halo","slides":"[{\"title\":\"a\"}]"}"#));
    assert_eq!(n.status, PayloadStatus::Decoded);
    // Nested string-encoded fields are left for the lenient sub-field helpers.
    assert_eq!(
        n.value,
        json!({"title": "Halo", "slides": "[{\"title\":\"a\"}]"})
    );
}

#[test]
fn malformed_json_string_reports_failure_with_best_effort_value() {
    let n = normalize(json!("{not valid json"));
    assert!(n.status.is_failure());
    assert_eq!(n.status.label(), "malformed");
    assert_eq!(n.value, json!({"content": "{not valid json"}));
}

#[test]
fn legacy_scalars_wrap_as_content() {
    let n = normalize(json!("Selamat datang"));
    assert_eq!(n.status, PayloadStatus::WrappedScalar);
    assert_eq!(n.value, json!({"content": "Selamat datang"}));

    assert_eq!(normalize(json!("42")).value, json!({"content": "42"}));
    assert_eq!(normalize(json!(7)).value, json!({"content": 7}));
    assert_eq!(normalize(json!(true)).value, json!({"content": true}));
}

#[test]
fn list_fields_accept_every_legacy_shape() {
    assert_eq!(normalize_list(Value::Null), Vec::<Value>::new());
    assert_eq!(normalize_list(json!("")), Vec::<Value>::new());
    assert_eq!(normalize_list(json!([1, 2])), vec![json!(1), json!(2)]);
    assert_eq!(normalize_list(json!("[1, 2]")), vec![json!(1), json!(2)]);
    assert_eq!(normalize_list(json!({"a": 1})), vec![json!({"a": 1})]);
    assert_eq!(normalize_list(json!(r#"{"a": 1}"#)), vec![json!({"a": 1})]);
    assert_eq!(normalize_list(json!("img/a.jpg")), vec![json!("img/a.jpg")]);
    assert_eq!(normalize_list(json!("[broken")), vec![json!("[broken")]);
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z {}\\[\\]\":,]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in arb_json()) {
        let once = normalize(raw);
        let twice = normalize(once.value.clone());
        prop_assert_eq!(twice.value, once.value.clone());
        prop_assert!(once.value.is_object() || once.value.is_array());
    }

    #[test]
    fn string_encoded_structures_decode_to_their_source(raw in arb_json()) {
        prop_assume!(raw.is_object() || raw.is_array());
        let encoded = Value::String(serde_json::to_string(&raw).unwrap());
        let n = normalize(encoded);
        prop_assert_eq!(n.status, PayloadStatus::Decoded);
        prop_assert_eq!(n.value, raw);
    }

    #[test]
    fn arbitrary_strings_never_fail_to_produce_a_structure(s in ".*") {
        let n = normalize(Value::String(s));
        prop_assert!(n.value.is_object() || n.value.is_array());
    }
}
