//! Per-type rendering strategies. Each is a pure function of payload and context.

pub(crate) mod collections;
pub(crate) mod forms;
pub(crate) mod hero;
pub(crate) mod media_blocks;
pub(crate) mod news;
pub(crate) mod schedule;
pub(crate) mod text;

use crate::content::blocks::{BlockKind, BlockPayload};
use crate::content::payloads::Heading;
use crate::content::sections::{SectionKind, SectionPayload};
use crate::i18n::labels::Label;
use crate::render::context::RenderCtx;
use crate::render::dispatch::Strategy;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};

impl Strategy for BlockKind {
    fn render(payload: &BlockPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
        match payload {
            BlockPayload::HeroCarousel(p) => hero::render(p, ctx),
            BlockPayload::Text(p) => text::text(p, ctx),
            BlockPayload::Image(p) => text::image(p, ctx),
            BlockPayload::TwoColumn(p) => text::two_column(p, ctx),
            BlockPayload::Accordion(p) => text::accordion(p, ctx),
            BlockPayload::Cards(p) => collections::cards(p, ctx),
            BlockPayload::GalleryCarousel(p) => collections::gallery(p, ctx),
            BlockPayload::VideoSection(p) => media_blocks::video(p, ctx),
            BlockPayload::Faq(p) => text::faq(p, ctx),
            BlockPayload::Figures(p) => collections::figures(p, ctx, false),
            BlockPayload::Partnerships(p) => collections::partners(p, ctx),
            BlockPayload::OrganizationChart(p) => collections::org_chart(p, ctx),
            BlockPayload::Achievements(p) => collections::achievements(p, ctx),
            BlockPayload::CurriculumTable(p) => schedule::curriculum(p, ctx),
            BlockPayload::Calendar(p) => schedule::calendar(p, ctx),
            BlockPayload::DocumentList(p) => media_blocks::documents(p, ctx),
            BlockPayload::ContactForm(p) => forms::contact(p, ctx),
            BlockPayload::MapEmbed(p) => media_blocks::map(p, ctx),
            BlockPayload::Brochure(p) => media_blocks::brochure(p, ctx),
            BlockPayload::NavigationGrid(p) => collections::navigation(p, ctx),
            BlockPayload::ProgramCards(p) => collections::programs(p, ctx),
            BlockPayload::FacilityGallery(p) => collections::facilities(p, ctx),
            BlockPayload::GlobalStage(p) => collections::global_stage(p, ctx),
            BlockPayload::MasjidFeature(p) => text::feature(p, ctx, "masjid"),
            BlockPayload::FeatureHighlight(p) => text::feature(p, ctx, "highlight"),
            BlockPayload::VideoProfile(p) => media_blocks::video(p, ctx),
            BlockPayload::LatestNews(p) => news::latest(p, ctx, ctx.opts.news_block_limit),
        }
    }
}

impl Strategy for SectionKind {
    fn render(payload: &SectionPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
        match payload {
            SectionPayload::Hero(p) => hero::render(p, ctx),
            SectionPayload::Welcome(p) => text::two_column(p, ctx),
            SectionPayload::Programs(p) => collections::programs(p, ctx),
            SectionPayload::Achievements(p) => collections::achievements(p, ctx),
            SectionPayload::Facilities(p) => collections::facilities(p, ctx),
            SectionPayload::News(p) => news::latest(p, ctx, ctx.opts.news_section_limit),
            SectionPayload::Testimonials(p) => collections::figures(p, ctx, true),
            SectionPayload::Partners(p) => collections::partners(p, ctx),
            SectionPayload::VideoProfile(p) => media_blocks::video(p, ctx),
            SectionPayload::CallToAction(p) => text::call_to_action(p, ctx),
        }
    }
}

/// `<header>` with the resolved title and subtitle; `None` when both are blank.
pub(crate) fn heading(h: &Heading, ctx: &RenderCtx<'_>) -> Option<Element> {
    let title = ctx.t(&h.title, &h.title_en);
    let subtitle = ctx.t(&h.subtitle, &h.subtitle_en);
    if title.is_empty() && subtitle.is_empty() {
        return None;
    }
    Some(
        el("header")
            .child_opt(non_empty(title).map(|t| el("h2").text(t)))
            .child_opt(non_empty(subtitle).map(|s| el("p").class("subtitle").text(s))),
    )
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    (!s.trim().is_empty()).then_some(s)
}

/// Paragraph of resolved text, skipped when blank.
pub(crate) fn para(class: &'static str, text: String) -> Option<Element> {
    non_empty(text).map(|t| el("p").class(class).text(t))
}

/// Multi-paragraph body; blank lines separate paragraphs.
pub(crate) fn prose(text: &str) -> Option<Element> {
    let paras: Vec<Element> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| el("p").text(p))
        .collect();
    (!paras.is_empty()).then(|| el("div").class("prose").children(paras))
}

/// Resolved image, or `None` when there is nothing to show.
pub(crate) fn img(path: &Option<String>, alt: &str, ctx: &RenderCtx<'_>) -> Option<Element> {
    ctx.media_url(path)
        .map(|src| el("img").attr("src", src).attr("alt", alt).attr("loading", "lazy"))
}

/// Resolved image with a visible placeholder when missing.
pub(crate) fn img_or_placeholder(path: &Option<String>, alt: &str, ctx: &RenderCtx<'_>) -> Element {
    img(path, alt, ctx).unwrap_or_else(|| {
        el("div")
            .class("image-placeholder")
            .text(ctx.label(Label::NoImage))
    })
}

/// Call-to-action link; `None` without both text and target.
pub(crate) fn button(text: String, href: &Option<String>) -> Option<Element> {
    let href = href.as_deref().map(str::trim).filter(|h| !h.is_empty())?;
    let text = non_empty(text)?;
    Some(el("a").class("button").attr("href", href).text(text))
}

#[cfg(test)]
#[path = "../../../tests/unit/render/strategies.rs"]
mod tests;
