use super::*;

#[test]
fn html_escapes_text_and_attributes() {
    let n: Node = el("a")
        .attr("href", "/x?a=1&b=\"2\"")
        .text("<script>alert('x')</script>")
        .into();
    assert_eq!(
        n.to_html(),
        "<a href=\"/x?a=1&amp;b=&quot;2&quot;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</a>"
    );
}

#[test]
fn void_and_boolean_attributes() {
    let n: Node = el("video")
        .flag("autoplay")
        .flag("muted")
        .child(el("source").attr("src", "a.mp4"))
        .into();
    assert_eq!(
        n.to_html(),
        "<video autoplay muted><source src=\"a.mp4\"></video>"
    );
}

#[test]
fn optional_builders_skip_absent_values() {
    let e = el("img")
        .attr_opt("alt", None::<String>)
        .attr_opt("src", Some("a.jpg"))
        .child_opt(None::<Node>);
    assert_eq!(e.get_attr("src"), Some("a.jpg"));
    assert_eq!(e.get_attr("alt"), None);
    assert!(e.children.is_empty());
}

#[test]
fn queries_walk_the_tree() {
    let n: Node = el("section")
        .class("block faq")
        .child(el("h2").text("FAQ"))
        .child(
            el("div")
                .class("faq-item")
                .child(el("p").class("faq-answer").text("Ya")),
        )
        .child(el("div").class("faq-item"))
        .into();
    assert_eq!(n.find_by_class("faq-item").len(), 2);
    assert_eq!(n.find_by_tag("p").len(), 1);
    assert_eq!(n.text_content(), "FAQYa");
    assert!(n.as_element().unwrap().has_class("faq"));
    assert!(!n.as_element().unwrap().has_class("fa"));
}
