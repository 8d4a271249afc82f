use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content::unit::UnitId;
use crate::foundation::error::{PageError, PageResult};
use crate::payload::lenient;

/// Supplies the raw unit collections for pages and the homepage.
///
/// Implementations return the JSON exactly as stored; no ordering is assumed.
pub trait ContentSource {
    fn page_blocks(&self, slug: &str) -> PageResult<Value>;

    fn home_sections(&self) -> PageResult<Value>;
}

/// Supplies post-like records for news strategies.
pub trait PostSource {
    fn posts(&self, category: Option<&str>) -> PageResult<Vec<Post>>;
}

/// A news post as returned by the post collaborator.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: UnitId,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "summary", deserialize_with = "lenient::opt_text")]
    pub excerpt: Option<String>,
    #[serde(default, alias = "summaryEn", deserialize_with = "lenient::opt_text")]
    pub excerpt_en: Option<String>,
    #[serde(default, alias = "thumbnail", alias = "featuredImage")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "isPublished",
        alias = "status",
        deserialize_with = "published_flag"
    )]
    pub published: bool,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// `publishedAt`, falling back to `createdAt`.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.published_at.or(self.created_at)
    }
}

/// Published flag as a bool, a `0/1`, or a status string (`"published"`).
fn published_flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "published" | "true" | "1"
        ),
        _ => false,
    })
}

/// Timestamps as RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or a bare date. Unparseable is absent.
fn opt_datetime<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = lenient::opt_text(d)? else {
        return Ok(None);
    };
    Ok(parse_timestamp(&raw))
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Fetch, filter and order the newest published posts.
///
/// Unpublished posts are dropped, the rest sorted by [`Post::effective_date`] descending (undated
/// posts last, source order kept on ties) and truncated to `limit`. A failing source yields an
/// empty list so the dependent block simply omits its items.
pub fn latest_posts(source: &dyn PostSource, category: Option<&str>, limit: usize) -> Vec<Post> {
    let posts = match source.posts(category) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, ?category, "latest posts lookup failed");
            return Vec::new();
        }
    };

    let mut published: Vec<Post> = posts.into_iter().filter(|p| p.published).collect();
    published.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
    published.truncate(limit);
    published
}

/// In-memory content source keyed by page slug.
#[derive(Clone, Debug, Default)]
pub struct StaticContent {
    pages: BTreeMap<String, Value>,
    home: Value,
}

impl StaticContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, slug: impl Into<String>, blocks: Value) -> Self {
        self.pages.insert(slug.into(), blocks);
        self
    }

    pub fn with_home(mut self, sections: Value) -> Self {
        self.home = sections;
        self
    }
}

impl ContentSource for StaticContent {
    fn page_blocks(&self, slug: &str) -> PageResult<Value> {
        self.pages
            .get(slug)
            .cloned()
            .ok_or_else(|| PageError::fetch(format!("no page with slug '{slug}'")))
    }

    fn home_sections(&self) -> PageResult<Value> {
        Ok(self.home.clone())
    }
}

/// In-memory post source.
#[derive(Clone, Debug, Default)]
pub struct StaticPosts {
    posts: Vec<Post>,
}

impl StaticPosts {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Parse a JSON array of posts (or a `{data: [...]}` envelope).
    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        let v: Value = serde_json::from_reader(r)
            .map_err(|e| PageError::serde(format!("parse posts JSON: {e}")))?;
        let list = match v {
            Value::Object(mut m) => m.remove("data").unwrap_or(Value::Null),
            v => v,
        };
        let posts: Vec<Post> = serde_json::from_value(list)
            .map_err(|e| PageError::serde(format!("decode posts: {e}")))?;
        Ok(Self { posts })
    }
}

impl PostSource for StaticPosts {
    fn posts(&self, category: Option<&str>) -> PageResult<Vec<Post>> {
        Ok(self
            .posts
            .iter()
            .filter(|p| match category {
                Some(c) => p.category.as_deref().is_some_and(|pc| pc.eq_ignore_ascii_case(c)),
                None => true,
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/source.rs"]
mod tests;
