use super::*;
use crate::foundation::core::Locale;
use crate::media::resolver::IdentityResolver;
use pretty_assertions::assert_eq;
use serde_json::json;

fn titles(node: &Node, class: &str) -> Vec<String> {
    node.find_by_class(class)
        .into_iter()
        .map(|e| Node::from(e.clone()).find_by_tag("h3")[0].clone())
        .map(|h| Node::from(h).text_content())
        .collect()
}

#[test]
fn calendar_sorts_by_start_date_with_undated_last() {
    let p: CalendarPayload = serde_json::from_value(json!({
        "events": [
            {"title": "Later", "date": "2025-09-01"},
            {"title": "TBA"},
            {"title": "Earlier", "startDate": "2025-07-14 08:00:00"},
            {"title": "Junk", "date": "soon"},
            {"title": "Middle", "date": "2025-08-17", "endDate": "2025-08-19"}
        ]
    }))
    .unwrap();
    let m = IdentityResolver;
    let ctx = RenderCtx::new(Locale::Id, &m);
    let node = calendar(&p, &ctx).unwrap();

    assert_eq!(
        titles(&node, "calendar-event"),
        vec!["Earlier", "Middle", "Later", "TBA", "Junk"]
    );
    let times: Vec<String> = node
        .find_by_tag("time")
        .into_iter()
        .map(|t| Node::from(t.clone()).text_content())
        .collect();
    assert_eq!(
        times,
        vec![
            "14 Juli 2025",
            "17 Agustus 2025 - 19 Agustus 2025",
            "1 September 2025",
            "soon"
        ]
    );
}

#[test]
fn calendar_dates_follow_locale() {
    let p: CalendarPayload =
        serde_json::from_value(json!({"events": [{"title": "A", "date": "2025-08-17"}]})).unwrap();
    let m = IdentityResolver;
    let ctx = RenderCtx::new(Locale::En, &m);
    let html = calendar(&p, &ctx).unwrap().to_html();
    assert!(html.contains("<time>August 17, 2025</time>"));
}

#[test]
fn curriculum_rows_accept_mixed_shapes() {
    let p: CurriculumPayload = serde_json::from_value(json!({
        "columns": ["Mapel", "Jam"],
        "columnsEn": ["Subject"],
        "rows": [
            ["Matematika", 6],
            "[\"Fisika\", 4]",
            {"mapel": "Biologi", "JAM": "3"}
        ]
    }))
    .unwrap();
    let m = IdentityResolver;
    let ctx = RenderCtx::new(Locale::En, &m);
    let node = curriculum(&p, &ctx).unwrap();

    let headers: Vec<String> = node
        .find_by_tag("th")
        .into_iter()
        .map(|t| Node::from(t.clone()).text_content())
        .collect();
    assert_eq!(headers, vec!["Subject", "Jam"]);

    let cells: Vec<String> = node
        .find_by_tag("td")
        .into_iter()
        .map(|t| Node::from(t.clone()).text_content())
        .collect();
    assert_eq!(
        cells,
        vec!["Matematika", "6", "Fisika", "4", "Biologi", "3"]
    );
}
