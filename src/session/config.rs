use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::carousel::machine::CarouselOpts;
use crate::foundation::core::{Locale, Millis};
use crate::foundation::error::{PageError, PageResult};
use crate::media::resolver::{BaseUrlResolver, IdentityResolver, MediaResolver};
use crate::render::context::RenderOpts;

/// Site-level settings, loaded from JSON. Every field has a default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_locale: Locale,
    /// Storage root that relative asset paths are joined onto. Paths pass through when unset.
    pub media_base_url: Option<String>,
    pub carousel: CarouselConfig,
    pub news: NewsConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub default_slide_ms: u64,
    pub resume_delay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let opts = CarouselOpts::default();
        Self {
            default_slide_ms: opts.default_slide.0,
            resume_delay_ms: opts.resume_delay.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub block_limit: usize,
    pub section_limit: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        let opts = RenderOpts::default();
        Self {
            block_limit: opts.news_block_limit,
            section_limit: opts.news_section_limit,
        }
    }
}

impl SiteConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| PageError::serde(format!("parse site config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PageError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> PageResult<()> {
        let mut errors = Vec::new();
        if let Some(base) = &self.media_base_url
            && let Err(e) = BaseUrlResolver::new(base)
        {
            errors.push(format!("media_base_url: {e}"));
        }
        if self.carousel.default_slide_ms == 0 {
            errors.push("carousel.default_slide_ms must be > 0".to_owned());
        }
        if self.carousel.resume_delay_ms == 0 {
            errors.push("carousel.resume_delay_ms must be > 0".to_owned());
        }
        if self.news.block_limit == 0 {
            errors.push("news.block_limit must be > 0".to_owned());
        }
        if self.news.section_limit == 0 {
            errors.push("news.section_limit must be > 0".to_owned());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PageError::validation(errors.join("; ")))
        }
    }

    pub fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            carousel: CarouselOpts {
                default_slide: Millis(self.carousel.default_slide_ms),
                resume_delay: Millis(self.carousel.resume_delay_ms),
            },
            news_block_limit: self.news.block_limit,
            news_section_limit: self.news.section_limit,
        }
    }

    /// Resolver for `media_base_url`, or pass-through when unset.
    pub fn media_resolver(&self) -> PageResult<Box<dyn MediaResolver>> {
        match &self.media_base_url {
            Some(base) => Ok(Box::new(BaseUrlResolver::new(base)?)),
            None => Ok(Box::new(IdentityResolver)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
