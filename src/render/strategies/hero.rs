use crate::carousel::machine::CarouselView;
use crate::content::payloads::{HeroPayload, HeroSlide};
use crate::foundation::core::Millis;
use crate::i18n::labels::Label;
use crate::media::video::embed_url;
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{button, img, non_empty};

pub(crate) fn render(p: &HeroPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let view = ctx.hero.cloned().unwrap_or_default();
    Ok(render_frame(p, &view, ctx).into())
}

/// Draw one carousel frame: the slide at `view.index` is active, the overlay is open when set.
pub fn render_frame(p: &HeroPayload, view: &CarouselView, ctx: &RenderCtx<'_>) -> Element {
    let slides: Vec<&HeroSlide> = p.slides.iter().filter(|s| s.is_active).collect();
    if slides.is_empty() {
        return el("div")
            .class("hero-carousel empty")
            .child(el("p").class("hero-placeholder").text(ctx.label(Label::NoSlides)));
    }

    let active = if view.index < slides.len() { view.index } else { 0 };
    let mut root = el("div")
        .class("hero-carousel")
        .attr("data-active", active.to_string())
        .attr("data-slides", slides.len().to_string())
        .children(
            slides
                .iter()
                .enumerate()
                .map(|(i, s)| slide(s, i == active, ctx)),
        );

    if slides.len() > 1 {
        root = root.child(controls(slides.len(), active, ctx));
    }
    if let Some(id) = &view.overlay {
        root = root.child(overlay(id, ctx));
    }
    root
}

fn slide(s: &HeroSlide, active: bool, ctx: &RenderCtx<'_>) -> Element {
    let title = ctx.t(&s.title, &s.title_en);
    let subtitle = ctx.t(&s.subtitle, &s.subtitle_en);

    let content = el("div")
        .class("hero-content")
        .child_opt(non_empty(title.clone()).map(|t| el("h1").text(t)))
        .child_opt(non_empty(subtitle).map(|t| el("p").text(t)))
        .child_opt(button(ctx.t(&s.button_text, &s.button_text_en), &s.button_link))
        .child_opt(play_button(s, ctx));

    el("div")
        .class(if active { "hero-slide active" } else { "hero-slide" })
        .attr("aria-hidden", if active { "false" } else { "true" })
        .child(background(s, &title, ctx))
        .child(content)
}

/// Background video over the static image; the image shows through if the video fails to load.
fn background(s: &HeroSlide, alt: &str, ctx: &RenderCtx<'_>) -> Element {
    let image = img(&s.image, alt, ctx);
    let video = ctx.media_url(&s.background_video).map(|src| {
        let v = el("video")
            .class("hero-video")
            .flag("autoplay")
            .flag("muted")
            .flag("playsinline");
        let duration = s.video_duration.and_then(Millis::from_secs_f64);
        let v = match duration {
            Some(d) => v.attr("data-duration-ms", d.0.to_string()),
            None => v.flag("loop"),
        };
        v.child(el("source").attr("src", src))
    });

    let media = el("div").class("hero-media");
    match (image, video) {
        (None, None) => media.child(
            el("div")
                .class("hero-placeholder")
                .text(ctx.label(Label::NoImage)),
        ),
        (image, video) => media.child_opt(image).child_opt(video),
    }
}

fn play_button(s: &HeroSlide, ctx: &RenderCtx<'_>) -> Option<Element> {
    let url = s.video_url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
    Some(
        el("button")
            .class("hero-play")
            .attr("type", "button")
            .attr("data-video-url", url)
            .text(ctx.label(Label::WatchVideo)),
    )
}

fn controls(n: usize, active: usize, ctx: &RenderCtx<'_>) -> Element {
    let dots = (0..n).map(|i| {
        el("button")
            .class(if i == active { "hero-dot active" } else { "hero-dot" })
            .attr("type", "button")
            .attr("data-index", i.to_string())
            .attr("aria-label", (i + 1).to_string())
    });
    el("div")
        .class("hero-controls")
        .child(
            el("button")
                .class("hero-prev")
                .attr("type", "button")
                .attr("aria-label", ctx.label(Label::Previous)),
        )
        .child(
            el("button")
                .class("hero-next")
                .attr("type", "button")
                .attr("aria-label", ctx.label(Label::Next)),
        )
        .child(el("nav").class("hero-dots").children(dots))
}

fn overlay(video_id: &str, ctx: &RenderCtx<'_>) -> Element {
    el("div")
        .class("video-overlay")
        .attr("role", "dialog")
        .child(
            el("iframe")
                .attr("src", embed_url(video_id))
                .attr("allow", "autoplay; encrypted-media; picture-in-picture")
                .flag("allowfullscreen"),
        )
        .child(
            el("button")
                .class("video-overlay-close")
                .attr("type", "button")
                .text(ctx.label(Label::Close)),
        )
}

#[cfg(test)]
#[path = "../../../tests/unit/render/hero.rs"]
mod tests;
