use crate::content::payloads::{BrochurePayload, DocumentListPayload, MapPayload, VideoPayload};
use crate::i18n::labels::Label;
use crate::media::video::{embed_url, extract_video_id, thumbnail_url};
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Node, el};
use crate::render::strategies::{heading, img, img_or_placeholder, non_empty, para};

const DEFAULT_MAP_HEIGHT: usize = 400;

/// Video section and video profile. Embeddable links get a poster with a play button that the
/// host wires to the overlay player; anything else links out.
pub(crate) fn video(p: &VideoPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    let url = p
        .video_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let player = match url.map(|u| (u, extract_video_id(u))) {
        Some((_, Some(id))) => {
            let poster = img(&p.thumbnail, &title, ctx)
                .unwrap_or_else(|| el("img").attr("src", thumbnail_url(&id)).attr("alt", title.clone()));
            el("div")
                .class("video-poster")
                .child(poster)
                .child(
                    el("button")
                        .class("video-play")
                        .attr("type", "button")
                        .attr("data-video-id", id.clone())
                        .attr("data-embed-url", embed_url(&id))
                        .text(ctx.label(Label::WatchVideo)),
                )
        }
        Some((u, None)) => el("div")
            .class("video-poster")
            .child(img_or_placeholder(&p.thumbnail, &title, ctx))
            .child(
                el("a")
                    .class("video-external")
                    .attr("href", u)
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text(ctx.label(Label::WatchVideo)),
            ),
        None => el("div")
            .class("video-poster")
            .child(img_or_placeholder(&p.thumbnail, &title, ctx)),
    };

    Ok(el("div")
        .class("video")
        .child_opt(heading(&p.heading, ctx))
        .child_opt(para("video-description", ctx.t(&p.description, &p.description_en)))
        .child(player)
        .into())
}

/// Embedded map. The embed URL is the one field this strategy cannot do without.
pub(crate) fn map(p: &MapPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let src = p
        .embed_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(RenderError::MissingField("embedUrl"))?;
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    Ok(el("div")
        .class("map-embed")
        .child_opt(heading(&p.heading, ctx))
        .child(
            el("iframe")
                .attr("src", src)
                .attr("title", title)
                .attr("height", p.height.unwrap_or(DEFAULT_MAP_HEIGHT).to_string())
                .attr("loading", "lazy")
                .attr("referrerpolicy", "no-referrer-when-downgrade"),
        )
        .child_opt(
            non_empty(ctx.t(&p.address, &p.address_en))
                .map(|a| el("address").text(a)),
        )
        .into())
}

pub(crate) fn documents(p: &DocumentListPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let items = p.documents.iter().map(|d| {
        let title = ctx.t(&d.title, &d.title_en);
        let meta = [d.file_type.clone(), d.size.clone()]
            .into_iter()
            .flatten()
            .filter_map(non_empty)
            .map(|m| m.to_uppercase())
            .collect::<Vec<_>>()
            .join(" · ");
        let entry = match ctx.media_url(&d.file_url) {
            Some(href) => el("a")
                .class("document-link")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(title),
            None => el("span").class("document-title").text(title),
        };
        el("li")
            .class("document")
            .child(entry)
            .child_opt(non_empty(meta).map(|m| el("small").text(m)))
    });
    Ok(el("div")
        .class("document-list")
        .child_opt(heading(&p.heading, ctx))
        .child(el("ul").children(items))
        .into())
}

pub(crate) fn brochure(p: &BrochurePayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    let label = non_empty(ctx.t(&p.button_text, &p.button_text_en))
        .unwrap_or_else(|| ctx.label(Label::Download).to_owned());
    let download = ctx.media_url(&p.file_url).map(|href| {
        el("a")
            .class("button download")
            .attr("href", href)
            .flag("download")
            .text(label)
    });
    Ok(el("div")
        .class("brochure")
        .child(img_or_placeholder(&p.cover_image, &title, ctx))
        .child(
            el("div")
                .class("brochure-body")
                .child_opt(heading(&p.heading, ctx))
                .child_opt(para("brochure-description", ctx.t(&p.description, &p.description_en)))
                .child_opt(download),
        )
        .into())
}
