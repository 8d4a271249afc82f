use crate::carousel::machine::{CarouselOpts, CarouselView};
use crate::content::source::{Post, PostSource, latest_posts};
use crate::foundation::core::Locale;
use crate::i18n::labels::Label;
use crate::i18n::resolve::{resolve_field, resolve_list};
use crate::media::resolver::MediaResolver;

/// Options carried into every rendering call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    pub carousel: CarouselOpts,
    /// Posts shown by a `latest-news` page block.
    pub news_block_limit: usize,
    /// Posts shown by the homepage news section.
    pub news_section_limit: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            carousel: CarouselOpts::default(),
            news_block_limit: 3,
            news_section_limit: 5,
        }
    }
}

/// Everything a strategy may consult besides its payload.
///
/// Passed explicitly into each call; there is no ambient locale or settings state.
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    pub locale: Locale,
    pub media: &'a dyn MediaResolver,
    pub posts: Option<&'a dyn PostSource>,
    pub opts: RenderOpts,
    /// Carousel frame to draw for hero units.
    pub hero: Option<&'a CarouselView>,
}

impl<'a> RenderCtx<'a> {
    pub fn new(locale: Locale, media: &'a dyn MediaResolver) -> Self {
        Self {
            locale,
            media,
            posts: None,
            opts: RenderOpts::default(),
            hero: None,
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

    pub fn with_hero_view(mut self, view: &'a CarouselView) -> Self {
        self.hero = Some(view);
        self
    }

    /// Locale-resolved text for one bilingual field.
    pub fn t(&self, primary: &Option<String>, translated: &Option<String>) -> String {
        resolve_field(self.locale, primary, translated)
    }

    pub fn t_list(&self, primary: &[String], translated: &[String]) -> Vec<String> {
        resolve_list(self.locale, primary, translated)
    }

    pub fn label(&self, label: Label) -> &'static str {
        label.text(self.locale)
    }

    pub fn media_url(&self, path: &Option<String>) -> Option<String> {
        path.as_deref().and_then(|p| self.media.resolve(p))
    }

    /// Newest published posts, or nothing when no post source is attached or it fails.
    pub fn latest_posts(&self, category: Option<&str>, limit: usize) -> Vec<Post> {
        match self.posts {
            Some(source) => latest_posts(source, category, limit),
            None => Vec::new(),
        }
    }
}
