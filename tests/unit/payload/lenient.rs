use super::*;
use serde_json::json;

#[derive(Debug, serde::Deserialize)]
struct Item {
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct Sample {
    #[serde(default, deserialize_with = "seq")]
    items: Vec<Item>,
    #[serde(default, deserialize_with = "seq_text")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "opt_text")]
    year: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    duration: Option<f64>,
    #[serde(default, deserialize_with = "opt_usize")]
    limit: Option<usize>,
    #[serde(default = "default_true", deserialize_with = "flag_default_true")]
    active: bool,
}

fn sample(v: serde_json::Value) -> Sample {
    serde_json::from_value(v).unwrap()
}

#[test]
fn missing_fields_take_defaults() {
    let p = sample(json!({}));
    assert!(p.items.is_empty());
    assert!(p.tags.is_empty());
    assert_eq!(p.year, None);
    assert_eq!(p.duration, None);
    assert_eq!(p.limit, None);
    assert!(p.active);
}

#[test]
fn string_encoded_lists_decode() {
    let p = sample(json!({
        "items": "[{\"name\":\"a\"},{\"name\":\"b\"}]",
        "tags": "[\"x\", 3, \"\"]"
    }));
    assert_eq!(p.items.len(), 2);
    assert_eq!(p.items[1].name, "b");
    assert_eq!(p.tags, vec!["x", "3"]);
}

#[test]
fn broken_list_items_surface_an_indexed_error() {
    let err = serde_json::from_value::<Sample>(json!({"items": [{"name": "a"}, {"nope": 1}]}))
        .unwrap_err();
    assert!(err.to_string().contains("[1]"));
}

#[test]
fn numeric_fields_accept_strings() {
    let p = sample(json!({"year": 2024, "duration": "8.5", "limit": "5"}));
    assert_eq!(p.year.as_deref(), Some("2024"));
    assert_eq!(p.duration, Some(8.5));
    assert_eq!(p.limit, Some(5));

    let p = sample(json!({"duration": ""}));
    assert_eq!(p.duration, None);
    assert!(serde_json::from_value::<Sample>(json!({"duration": "eight"})).is_err());
}

#[test]
fn flags_accept_loose_encodings() {
    assert!(!sample(json!({"active": 0})).active);
    assert!(!sample(json!({"active": "false"})).active);
    assert!(sample(json!({"active": "1"})).active);
    assert!(sample(json!({"active": null})).active);
    assert!(serde_json::from_value::<Sample>(json!({"active": "maybe"})).is_err());
}
