use crate::content::blocks::BlockKind;
use crate::content::sections::SectionKind;
use crate::content::source::{ContentSource, PostSource};
use crate::foundation::core::Locale;
use crate::foundation::error::PageResult;
use crate::media::resolver::MediaResolver;
use crate::render::context::{RenderCtx, RenderOpts};
use crate::session::page::{PageSnapshot, RenderedPage, render_page};

/// Page-assembly layer: fetch units from the content source, snapshot them, render.
///
/// Each call performs a fresh fetch; no state is carried between renders.
pub struct PageAssembler<'a> {
    content: &'a dyn ContentSource,
    media: &'a dyn MediaResolver,
    posts: Option<&'a dyn PostSource>,
    opts: RenderOpts,
}

impl<'a> PageAssembler<'a> {
    pub fn new(content: &'a dyn ContentSource, media: &'a dyn MediaResolver) -> Self {
        Self {
            content,
            media,
            posts: None,
            opts: RenderOpts::default(),
        }
    }

    pub fn with_posts(mut self, posts: &'a dyn PostSource) -> Self {
        self.posts = Some(posts);
        self
    }

    pub fn with_opts(mut self, opts: RenderOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Free-form blocks of the page at `slug`. A failing content source fails the page.
    #[tracing::instrument(skip(self))]
    pub fn render_blocks(&self, slug: &str, locale: Locale) -> PageResult<RenderedPage> {
        let raw = self.content.page_blocks(slug)?;
        let snapshot = PageSnapshot::<BlockKind>::from_value(raw)?;
        Ok(render_page(&snapshot, &self.ctx(locale)))
    }

    /// Fixed homepage sections.
    #[tracing::instrument(skip(self))]
    pub fn render_home(&self, locale: Locale) -> PageResult<RenderedPage> {
        let raw = self.content.home_sections()?;
        let snapshot = PageSnapshot::<SectionKind>::from_value(raw)?;
        Ok(render_page(&snapshot, &self.ctx(locale)))
    }

    fn ctx(&self, locale: Locale) -> RenderCtx<'a> {
        let ctx = RenderCtx::new(locale, self.media).with_opts(self.opts);
        match self.posts {
            Some(p) => ctx.with_posts(p),
            None => ctx,
        }
    }
}
