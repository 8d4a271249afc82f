use std::collections::BTreeMap;

use crate::content::payloads::{
    AchievementsPayload, CardsPayload, FacilityGalleryPayload, FiguresPayload, GalleryPayload,
    GlobalStagePayload, NavigationGridPayload, OrgChartPayload, PartnershipsPayload,
    ProgramCardsPayload,
};
use crate::i18n::labels::Label;
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{heading, img, img_or_placeholder, non_empty, para, prose};

fn grid(class: &'static str, items: impl IntoIterator<Item = Element>) -> Element {
    el("div").class(format!("grid {class}")).children(items)
}

/// Wrap `inner` in a link when `href` is non-blank.
fn linked(inner: Element, href: &Option<String>) -> Element {
    match href.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => el("a").attr("href", h).child(inner),
        None => inner,
    }
}

pub(crate) fn cards(p: &CardsPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let cards = p.cards.iter().map(|c| {
        let title = ctx.t(&c.title, &c.title_en);
        let card = el("article")
            .class("card")
            .attr_opt("data-icon", c.icon.clone())
            .child_opt(img(&c.image, &title, ctx))
            .child(el("h3").text(title))
            .child_opt(para("card-description", ctx.t(&c.description, &c.description_en)));
        linked(card, &c.link)
    });
    Ok(el("div")
        .class("cards")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("card-grid", cards))
        .into())
}

pub(crate) fn gallery(p: &GalleryPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let slides: Vec<Element> = p
        .images
        .iter()
        .filter_map(|image| {
            let caption = ctx.t(&image.caption, &image.caption_en);
            let picture = img(&image.url, &caption, ctx)?;
            Some(
                el("figure")
                    .class("gallery-slide")
                    .child(picture)
                    .child_opt(non_empty(caption).map(|c| el("figcaption").text(c))),
            )
        })
        .collect();

    let track = if slides.is_empty() {
        el("div")
            .class("image-placeholder")
            .text(ctx.label(Label::NoImage))
    } else {
        el("div")
            .class("gallery-track")
            .attr("data-count", slides.len().to_string())
            .children(slides)
    };
    Ok(el("div")
        .class("gallery-carousel")
        .child_opt(heading(&p.heading, ctx))
        .child(track)
        .into())
}

/// Notable figures, or testimonials when `quotes` is set (quote first, then attribution).
pub(crate) fn figures(
    p: &FiguresPayload,
    ctx: &RenderCtx<'_>,
    quotes: bool,
) -> Result<Node, RenderError> {
    let items = p.items.iter().map(|f| {
        let name = ctx.t(&f.name, &None);
        let quote = para("quote", ctx.t(&f.quote, &f.quote_en)).map(|q| el("blockquote").child(q));
        let person = el("div")
            .class("person")
            .child(img_or_placeholder(&f.image, &name, ctx))
            .child(el("h3").text(name))
            .child_opt(para("role", ctx.t(&f.role, &f.role_en)));
        if quotes {
            el("article").class("testimonial").child_opt(quote).child(person)
        } else {
            el("article").class("figure").child(person).child_opt(quote)
        }
    });
    let class = if quotes { "testimonials" } else { "figures" };
    Ok(el("div")
        .class(class)
        .child_opt(heading(&p.heading, ctx))
        .child(grid("people", items))
        .into())
}

pub(crate) fn partners(p: &PartnershipsPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let items = p.partners.iter().map(|partner| {
        let name = ctx.t(&partner.name, &None);
        let logo = img(&partner.logo, &name, ctx)
            .unwrap_or_else(|| el("span").class("partner-name").text(name.clone()));
        let card = el("div")
            .class("partner")
            .child(logo)
            .child_opt(para(
                "partner-description",
                ctx.t(&partner.description, &partner.description_en),
            ));
        linked(card, &partner.url)
    });
    Ok(el("div")
        .class("partnerships")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("partner-grid", items))
        .into())
}

/// Members grouped into rows by hierarchy level; members without a level form the last row.
pub(crate) fn org_chart(p: &OrgChartPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let mut levels: BTreeMap<usize, Vec<Element>> = BTreeMap::new();
    for m in &p.members {
        let name = ctx.t(&m.name, &None);
        let card = el("div")
            .class("org-member")
            .child(img_or_placeholder(&m.image, &name, ctx))
            .child(el("h4").text(name))
            .child_opt(para("position", ctx.t(&m.position, &m.position_en)));
        levels
            .entry(m.level.unwrap_or(usize::MAX))
            .or_default()
            .push(card);
    }
    let title = ctx.t(&p.heading.title, &p.heading.title_en);
    let rows = levels
        .into_values()
        .map(|members| el("div").class("org-level").children(members));
    Ok(el("div")
        .class("organization-chart")
        .child_opt(heading(&p.heading, ctx))
        .child_opt(img(&p.image, &title, ctx).map(|i| i.class("org-chart-image")))
        .children(rows)
        .into())
}

pub(crate) fn achievements(
    p: &AchievementsPayload,
    ctx: &RenderCtx<'_>,
) -> Result<Node, RenderError> {
    let items = p.items.iter().map(|a| {
        let title = ctx.t(&a.title, &a.title_en);
        el("article")
            .class("achievement")
            .child_opt(img(&a.image, &title, ctx))
            .child_opt(
                a.year
                    .as_deref()
                    .map(str::trim)
                    .filter(|y| !y.is_empty())
                    .map(|y| el("span").class("year").text(y)),
            )
            .child_opt(para("category", ctx.t(&a.category, &a.category_en)))
            .child(el("h3").text(title))
            .child_opt(para("achievement-description", ctx.t(&a.description, &a.description_en)))
    });
    Ok(el("div")
        .class("achievements")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("achievement-grid", items))
        .into())
}

pub(crate) fn navigation(
    p: &NavigationGridPayload,
    ctx: &RenderCtx<'_>,
) -> Result<Node, RenderError> {
    let items = p.items.iter().filter_map(|item| {
        let label = non_empty(ctx.t(&item.label, &item.label_en))?;
        let tile = el("div")
            .class("nav-tile")
            .attr_opt("data-icon", item.icon.clone())
            .child_opt(img(&item.image, &label, ctx))
            .child(el("h3").text(label))
            .child_opt(para("nav-description", ctx.t(&item.description, &item.description_en)));
        Some(linked(tile, &item.href))
    });
    Ok(el("div")
        .class("navigation-grid")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("nav-grid", items))
        .into())
}

pub(crate) fn programs(p: &ProgramCardsPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let items = p.programs.iter().map(|prog| {
        let name = ctx.t(&prog.name, &prog.name_en);
        let features = ctx.t_list(&prog.features, &prog.features_en);
        let list = (!features.is_empty()).then(|| {
            el("ul")
                .class("program-features")
                .children(features.into_iter().map(|f| el("li").text(f)))
        });
        let card = el("article")
            .class("program")
            .child(img_or_placeholder(&prog.image, &name, ctx))
            .child(el("h3").text(name))
            .child_opt(para("program-description", ctx.t(&prog.description, &prog.description_en)))
            .child_opt(list);
        linked(card, &prog.link)
    });
    Ok(el("div")
        .class("program-cards")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("program-grid", items))
        .into())
}

pub(crate) fn facilities(
    p: &FacilityGalleryPayload,
    ctx: &RenderCtx<'_>,
) -> Result<Node, RenderError> {
    let items = p.facilities.iter().map(|f| {
        let name = ctx.t(&f.name, &f.name_en);
        let extra: Vec<Element> = f
            .images
            .iter()
            .filter_map(|i| img(&i.url, &ctx.t(&i.caption, &i.caption_en), ctx))
            .collect();
        let thumbs = (!extra.is_empty()).then(|| el("div").class("facility-photos").children(extra));
        el("article")
            .class("facility")
            .child(img_or_placeholder(&f.image, &name, ctx))
            .child(el("h3").text(name))
            .child_opt(prose(&ctx.t(&f.description, &f.description_en)))
            .child_opt(thumbs)
    });
    Ok(el("div")
        .class("facility-gallery")
        .child_opt(heading(&p.heading, ctx))
        .child(grid("facility-grid", items))
        .into())
}

pub(crate) fn global_stage(
    p: &GlobalStagePayload,
    ctx: &RenderCtx<'_>,
) -> Result<Node, RenderError> {
    let items = p.items.iter().map(|item| {
        let title = ctx.t(&item.title, &item.title_en);
        let meta = [
            non_empty(ctx.t(&item.country, &item.country_en)),
            item.year.clone().and_then(non_empty),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
        el("li")
            .class("stage-item")
            .child_opt(img(&item.image, &title, ctx))
            .child(el("h3").text(title))
            .child_opt(para("stage-meta", meta))
    });
    Ok(el("div")
        .class("global-stage")
        .child_opt(img(&p.image, "", ctx).map(|i| i.class("stage-background")))
        .child_opt(heading(&p.heading, ctx))
        .child_opt(prose(&ctx.t(&p.description, &p.description_en)))
        .child(el("ul").class("stage-list").children(items))
        .into())
}
