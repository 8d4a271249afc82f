use super::*;
use crate::content::blocks::BlockKind;
use crate::content::sections::SectionKind;
use crate::media::resolver::IdentityResolver;
use serde_json::json;

#[test]
fn envelopes_and_encoded_arrays_are_unwrapped() {
    let inner = json!([{"id": 1, "type": "text"}]);
    for v in [
        inner.clone(),
        json!({"data": inner.clone()}),
        json!({"data": {"blocks": inner.clone()}}),
        json!({"sections": inner.clone()}),
        Value::String(inner.to_string()),
    ] {
        let snap = PageSnapshot::<BlockKind>::from_value(v).unwrap();
        assert_eq!(snap.units().len(), 1);
    }
    assert!(
        PageSnapshot::<BlockKind>::from_value(Value::Null)
            .unwrap()
            .units()
            .is_empty()
    );
}

#[test]
fn non_unit_entries_are_counted_not_fatal() {
    let snap = PageSnapshot::<BlockKind>::from_value(json!([
        {"id": "a", "type": "text"},
        42,
        "stray",
        {"id": "b", "type": "faq"}
    ]))
    .unwrap();
    assert_eq!(snap.units().len(), 2);
    assert_eq!(snap.rejected(), 2);
}

#[test]
fn unrecognizable_top_level_is_a_payload_error() {
    let err = PageSnapshot::<BlockKind>::from_value(json!({"page": "home"})).unwrap_err();
    assert!(matches!(err, PageError::Payload(_)));
    let err = PageSnapshot::<BlockKind>::from_reader("[{".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn rendered_page_counts_and_serializes() {
    let snap = PageSnapshot::<BlockKind>::from_value(json!([
        {"id": "t", "type": "text", "order": 2, "payload": {"content": "Halo"}},
        {"id": "x", "type": "unsupported-x", "order": 1},
        {"id": "b", "type": "faq", "order": 3, "payload": "{broken"}
    ]))
    .unwrap();
    let m = IdentityResolver;
    let ctx = RenderCtx::new(Locale::Id, &m);
    let page = render_page(&snap, &ctx);

    assert_eq!(page.items().len(), 3);
    assert_eq!(page.visible_count(), 2);
    assert_eq!(page.fallbacks()[0].id.0, "b");

    let html = page.to_html();
    assert_eq!(html.lines().count(), 2);
    assert!(html.lines().next().unwrap().contains("data-unit-id=\"t\""));
    assert!(html.contains("Kesalahan render"));
}

#[test]
fn hero_carousels_follow_visible_hero_units() {
    let snap = PageSnapshot::<SectionKind>::from_value(json!([
        {"id": "h2", "type": "hero", "order": 5, "payload": {"slides": [{"title": "A"}]}},
        {"id": "h1", "type": "hero", "order": 1, "payload": {"slides": [{"title": "A"}, {"title": "B"}]}},
        {"id": "off", "type": "hero", "isActive": false, "payload": {"slides": []}},
        {"id": "n", "type": "news"}
    ]))
    .unwrap();
    let carousels = snap.hero_carousels(CarouselOpts::default(), Millis(100));
    let ids: Vec<&str> = carousels.iter().map(|(id, _)| id.0.as_str()).collect();
    assert_eq!(ids, vec!["h1", "h2"]);
    assert_eq!(carousels[0].1.next_deadline(), Some(Millis(5100)));
    assert_eq!(carousels[1].1.next_deadline(), None);
}

#[test]
fn odd_envelopes_still_render_every_unit() {
    let snap = PageSnapshot::<BlockKind>::from_value(json!([
        {"id": "a", "type": "text", "payload": {"content": "Satu"}, "content": "legacy"},
        {"id": "b", "type": "text", "order": "first", "payload": {"content": "Dua"}},
        {"id": "c", "type": "text", "isActive": "maybe", "payload": {"content": "Tiga"}},
        {"id": "g", "type": "gallery", "payload": ["a.jpg", "b.jpg"]}
    ]))
    .unwrap();
    assert_eq!(snap.units().len(), 4);
    assert_eq!(snap.rejected(), 0);

    let m = IdentityResolver;
    let page = render_page(&snap, &RenderCtx::new(Locale::Id, &m));
    assert_eq!(page.visible_count(), 4);
    assert!(page.fallbacks().is_empty());
    let html = page.to_html();
    for text in ["Satu", "Dua", "Tiga", "b.jpg"] {
        assert!(html.contains(text), "{text}");
    }
}
