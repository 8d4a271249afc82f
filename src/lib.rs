//! pageblocks renders editor-configured, bilingual content blocks into a fault-tolerant page.
//!
//! Content units arrive as loosely-typed JSON. The engine:
//!
//! - Normalizes each payload once into a typed schema ([`PageSnapshot`])
//! - Orders, filters and groups the units ([`arrange`])
//! - Dispatches each unit to its strategy, turning failures into visible fallbacks ([`render_page`])
//! - Drives hero carousel timing and interaction on a caller-supplied clock ([`HeroCarousel`])
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod carousel;
/// Content unit model, taxonomies and payload schemas.
pub mod content;
pub(crate) mod i18n;
pub(crate) mod media;
pub(crate) mod payload;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod session;

pub use crate::foundation::core::{Locale, Millis};
pub use crate::foundation::error::{PageError, PageResult};

pub use crate::carousel::machine::{
    CarouselEvent, CarouselOpts, CarouselState, CarouselView, HeroCarousel, SlideTiming,
    VideoAction,
};
pub use crate::carousel::timer::TimerSlot;
pub use crate::content::blocks::{BlockKind, BlockPayload};
pub use crate::content::kind::Taxonomy;
pub use crate::content::sections::{SectionKind, SectionPayload};
pub use crate::content::source::{
    ContentSource, Post, PostSource, StaticContent, StaticPosts, latest_posts,
};
pub use crate::content::unit::{ContentUnit, RawUnit, UnitBody, UnitId};
pub use crate::i18n::labels::{Label, format_date, month_name};
pub use crate::i18n::resolve::{resolve, resolve_field, resolve_list};
pub use crate::media::resolver::{BaseUrlResolver, IdentityResolver, MediaResolver};
pub use crate::media::video::{embed_url, extract_video_id, thumbnail_url};
pub use crate::payload::normalize::{NormalizedPayload, PayloadStatus, normalize, normalize_list};
pub use crate::pipeline::arrange::{LayoutItem, arrange, group_adjacent, visible_in_order};
pub use crate::render::context::{RenderCtx, RenderOpts};
pub use crate::render::dispatch::{Rendered, Strategy, dispatch, dispatch_item};
pub use crate::render::failure::{RenderError, RenderFallback};
pub use crate::render::node::{Element, Node, el};
pub use crate::render::strategies::hero::render_frame as render_hero_frame;
pub use crate::session::assemble::PageAssembler;
pub use crate::session::config::{CarouselConfig, NewsConfig, SiteConfig};
pub use crate::session::page::{PageSnapshot, RenderedPage, render_page};
