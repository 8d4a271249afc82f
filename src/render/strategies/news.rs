use crate::content::payloads::LatestNewsPayload;
use crate::content::source::Post;
use crate::i18n::labels::{Label, format_date};
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{button, heading, img_or_placeholder, para};

/// Newest published posts. `default_limit` differs between the page block and the homepage
/// section; an explicit `limit` in the payload wins.
pub(crate) fn latest(
    p: &LatestNewsPayload,
    ctx: &RenderCtx<'_>,
    default_limit: usize,
) -> Result<Node, RenderError> {
    let limit = p.limit.filter(|n| *n > 0).unwrap_or(default_limit);
    let category = p.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let posts = ctx.latest_posts(category, limit);

    let list = if posts.is_empty() {
        el("p").class("news-empty").text(ctx.label(Label::NoNews))
    } else {
        el("div")
            .class("grid news-grid")
            .children(posts.iter().map(|post| card(post, ctx)))
    };

    Ok(el("div")
        .class("latest-news")
        .child_opt(heading(&p.heading, ctx))
        .child(list)
        .child_opt(button(ctx.label(Label::ReadMore).to_owned(), &p.view_all_link))
        .into())
}

fn card(post: &Post, ctx: &RenderCtx<'_>) -> Element {
    let title = ctx.t(&post.title, &post.title_en);
    let date = post
        .effective_date()
        .map(|d| format_date(ctx.locale, d.date_naive()));
    let body = el("article")
        .class("news-card")
        .attr("data-post-id", post.id.0.clone())
        .child(img_or_placeholder(&post.image, &title, ctx))
        .child_opt(date.map(|d| el("time").text(d)))
        .child(el("h3").text(title))
        .child_opt(para("news-excerpt", ctx.t(&post.excerpt, &post.excerpt_en)));
    match post.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => el("a").attr("href", format!("/news/{slug}")).child(body),
        None => body,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/news.rs"]
mod tests;
