use crate::content::payloads::ContactFormPayload;
use crate::i18n::labels::Label;
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{heading, non_empty, para};

const DEFAULT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// One form control for a known field name; unknown names become plain text inputs.
fn field(name: &str, ctx: &RenderCtx<'_>) -> Element {
    let key = name.trim().to_ascii_lowercase();
    let (label, input_type) = match key.as_str() {
        "name" | "nama" => (ctx.label(Label::Name).to_owned(), "text"),
        "email" => (ctx.label(Label::Email).to_owned(), "email"),
        "phone" | "telepon" => (ctx.label(Label::Phone).to_owned(), "tel"),
        "message" | "pesan" => (ctx.label(Label::Message).to_owned(), "textarea"),
        _ => (name.trim().to_owned(), "text"),
    };
    let control = if input_type == "textarea" {
        el("textarea").attr("name", key.clone()).attr("rows", "5")
    } else {
        el("input").attr("type", input_type).attr("name", key.clone())
    };
    el("label")
        .class("form-field")
        .child(el("span").text(label))
        .child(control)
}

/// Contact details beside a static form. Submission and validation belong to the host.
pub(crate) fn contact(p: &ContactFormPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let fields: Vec<Element> = if p.fields.is_empty() {
        DEFAULT_FIELDS.iter().map(|f| field(f, ctx)).collect()
    } else {
        p.fields.iter().map(|f| field(f, ctx)).collect()
    };
    let submit = non_empty(ctx.t(&p.submit_text, &p.submit_text_en))
        .unwrap_or_else(|| ctx.label(Label::Send).to_owned());

    let details = [
        (Label::Email, p.email.clone().and_then(non_empty)),
        (Label::Phone, p.phone.clone().and_then(non_empty)),
        (Label::Address, non_empty(ctx.t(&p.address, &p.address_en))),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        let value = value?;
        Some(
            el("li")
                .child(el("strong").text(ctx.label(label)))
                .child(el("span").text(value)),
        )
    })
    .collect::<Vec<_>>();

    let form = el("form")
        .class("contact-form-fields")
        .attr("method", "post")
        .attr_opt("action", p.action.clone().and_then(non_empty))
        .children(fields)
        .child(el("button").attr("type", "submit").text(submit));

    Ok(el("div")
        .class("contact-form")
        .child_opt(heading(&p.heading, ctx))
        .child_opt(para("contact-description", ctx.t(&p.description, &p.description_en)))
        .child_opt((!details.is_empty()).then(|| el("ul").class("contact-details").children(details)))
        .child(form)
        .into())
}
