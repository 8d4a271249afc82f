use crate::content::payloads::{
    AccordionPayload, CallToActionPayload, FaqPayload, FeaturePayload, ImagePayload, TextPayload,
    TwoColumnPayload,
};
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{button, heading, img, img_or_placeholder, non_empty, para, prose};

pub(crate) fn text(p: &TextPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let align = match p.alignment.as_deref().map(str::trim) {
        Some("center") => "text center",
        Some("right") => "text right",
        _ => "text",
    };
    Ok(el("div")
        .class(align)
        .child_opt(heading(&p.heading, ctx))
        .child_opt(prose(&ctx.t(&p.content, &p.content_en)))
        .into())
}

pub(crate) fn image(p: &ImagePayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let alt = ctx.t(&p.alt, &p.alt_en);
    let picture = img_or_placeholder(&p.image, &alt, ctx);
    let picture = match p.link.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(href) => el("a").attr("href", href).child(picture),
        None => picture,
    };
    Ok(el("figure")
        .child(picture)
        .child_opt(non_empty(ctx.t(&p.caption, &p.caption_en)).map(|c| el("figcaption").text(c)))
        .into())
}

pub(crate) fn two_column(p: &TwoColumnPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    let copy = el("div")
        .class("column-text")
        .child_opt(heading(&p.heading, ctx))
        .child_opt(prose(&ctx.t(&p.content, &p.content_en)))
        .child_opt(button(ctx.t(&p.button_text, &p.button_text_en), &p.button_link));
    let picture = el("div")
        .class("column-image")
        .child(img_or_placeholder(&p.image, &title, ctx));
    Ok(columns(copy, picture, p.image_position.as_deref()).into())
}

/// Two-column row with the image on the requested side (right by default).
fn columns(copy: Element, picture: Element, image_position: Option<&str>) -> Element {
    let row = el("div").class("two-column");
    match image_position.map(str::trim) {
        Some("left") => row.child(picture).child(copy),
        _ => row.child(copy).child(picture),
    }
}

pub(crate) fn accordion(p: &AccordionPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let items = p.items.iter().map(|item| {
        el("details")
            .class("accordion-item")
            .child(el("summary").text(ctx.t(&item.title, &item.title_en)))
            .child_opt(prose(&ctx.t(&item.content, &item.content_en)))
    });
    Ok(el("div")
        .class("accordion")
        .child_opt(heading(&p.heading, ctx))
        .children(items)
        .into())
}

pub(crate) fn faq(p: &FaqPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let items = p
        .items
        .iter()
        .filter_map(|item| {
            let q = non_empty(ctx.t(&item.question, &item.question_en))?;
            Some(
                el("details")
                    .class("faq-item")
                    .child(el("summary").class("faq-question").text(q))
                    .child_opt(para("faq-answer", ctx.t(&item.answer, &item.answer_en))),
            )
        });
    Ok(el("div")
        .class("faq")
        .child_opt(heading(&p.heading, ctx))
        .children(items)
        .into())
}

/// Masjid and feature-highlight blocks share a layout and differ only in styling hook.
pub(crate) fn feature(
    p: &FeaturePayload,
    ctx: &RenderCtx<'_>,
    variant: &'static str,
) -> Result<Node, RenderError> {
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    let features = p.features.iter().map(|f| {
        el("li")
            .class("feature")
            .attr_opt("data-icon", f.icon.clone())
            .child(el("h3").text(ctx.t(&f.title, &f.title_en)))
            .child_opt(para("feature-description", ctx.t(&f.description, &f.description_en)))
    });
    let copy = el("div")
        .class("column-text")
        .child_opt(heading(&p.heading, ctx))
        .child_opt(prose(&ctx.t(&p.description, &p.description_en)))
        .child(el("ul").class("feature-list").children(features));
    let picture = el("div")
        .class("column-image")
        .child(img_or_placeholder(&p.image, &title, ctx));
    Ok(el("div")
        .class(format!("feature-block {variant}"))
        .child(columns(copy, picture, p.image_position.as_deref()))
        .into())
}

pub(crate) fn call_to_action(
    p: &CallToActionPayload,
    ctx: &RenderCtx<'_>,
) -> Result<Node, RenderError> {
    Ok(el("div")
        .class("call-to-action")
        .child_opt(img(&p.image, "", ctx).map(|i| i.class("cta-background")))
        .child_opt(heading(&p.heading, ctx))
        .child_opt(para("cta-description", ctx.t(&p.description, &p.description_en)))
        .child_opt(button(ctx.t(&p.button_text, &p.button_text_en), &p.button_link))
        .into())
}
