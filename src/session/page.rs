use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::carousel::machine::{CarouselOpts, HeroCarousel};
use crate::content::kind::Taxonomy;
use crate::content::unit::{ContentUnit, RawUnit, UnitBody, UnitId};
use crate::foundation::core::{Locale, Millis};
use crate::foundation::error::{PageError, PageResult};
use crate::pipeline::arrange::{arrange, visible_in_order};
use crate::render::context::RenderCtx;
use crate::render::dispatch::{Rendered, Strategy, dispatch_item};
use crate::render::failure::RenderFallback;
use crate::render::node::Node;

const ENVELOPE_KEYS: [&str; 4] = ["data", "blocks", "sections", "items"];

/// Immutable set of content units from one fetch, with every payload normalized and decoded.
///
/// A new fetch builds a new snapshot; nothing here is mutated after construction.
#[derive(Clone, Debug)]
pub struct PageSnapshot<K: Taxonomy> {
    units: Vec<ContentUnit<K>>,
    rejected: usize,
}

impl<K: Taxonomy> PageSnapshot<K> {
    /// Build from the content source's JSON: an array of units, or an object wrapping one under
    /// `data`, `blocks`, `sections` or `items`. A JSON-encoded string is decoded first.
    ///
    /// Entries that are not unit objects are skipped and counted in [`PageSnapshot::rejected`].
    pub fn from_value(v: Value) -> PageResult<Self> {
        let mut units = Vec::new();
        let mut rejected = 0usize;
        for (i, item) in unit_list(v)?.into_iter().enumerate() {
            match serde_json::from_value::<RawUnit>(item) {
                Ok(raw) => units.push(ContentUnit::from_raw(raw)),
                Err(e) => {
                    rejected += 1;
                    tracing::warn!(family = K::FAMILY, index = i, error = %e, "skipping entry that is not a content unit");
                }
            }
        }
        Ok(Self { units, rejected })
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        let v: Value = serde_json::from_reader(r)
            .map_err(|e| PageError::serde(format!("parse content units JSON: {e}")))?;
        Self::from_value(v)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PageError::validation(format!("open content units JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Units in source order, including inactive ones.
    pub fn units(&self) -> &[ContentUnit<K>] {
        &self.units
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// One carousel per visible hero unit, in render order, started at `now`.
    pub fn hero_carousels(&self, opts: CarouselOpts, now: Millis) -> Vec<(UnitId, HeroCarousel)> {
        visible_in_order(&self.units)
            .into_iter()
            .filter_map(|u| match u.body() {
                UnitBody::Ready(p) => K::hero(p)
                    .map(|hero| (u.id().clone(), HeroCarousel::from_payload(hero, opts, now))),
                _ => None,
            })
            .collect()
    }
}

fn unit_list(v: Value) -> PageResult<Vec<Value>> {
    match v {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        Value::Object(mut m) => {
            for key in ENVELOPE_KEYS {
                if let Some(inner) = m.remove(key) {
                    return unit_list(inner);
                }
            }
            Err(PageError::payload(
                "expected an array of content units or an object wrapping one",
            ))
        }
        Value::String(s) => {
            let decoded: Value = serde_json::from_str(&s)
                .map_err(|e| PageError::payload(format!("content units string is not JSON: {e}")))?;
            match decoded {
                Value::String(_) => Err(PageError::payload("doubly encoded content units")),
                other => unit_list(other),
            }
        }
        other => Err(PageError::payload(format!(
            "expected an array of content units, got {other}"
        ))),
    }
}

/// Flat render output of one page.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    locale: Locale,
    items: Vec<Rendered>,
}

impl RenderedPage {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn items(&self) -> &[Rendered] {
        &self.items
    }

    /// Outputs that show something (unknown tags contribute nothing).
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|r| r.is_visible()).count()
    }

    pub fn fallbacks(&self) -> Vec<&RenderFallback> {
        self.items.iter().flat_map(Rendered::fallbacks).collect()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.items
            .iter()
            .filter_map(|r| r.to_node(self.locale))
            .collect()
    }

    /// HTML fragment, one top-level element per line.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            node.write_html(&mut out);
            out.push('\n');
        }
        out
    }
}

/// Run the ordering pipeline and the dispatcher over a snapshot.
///
/// Never fails: unknown units contribute nothing and broken units become fallbacks.
#[tracing::instrument(skip_all, fields(family = K::FAMILY, locale = %ctx.locale))]
pub fn render_page<K: Strategy>(snapshot: &PageSnapshot<K>, ctx: &RenderCtx<'_>) -> RenderedPage {
    let items: Vec<Rendered> = arrange(snapshot.units())
        .iter()
        .map(|item| dispatch_item(item, ctx))
        .collect();
    let page = RenderedPage {
        locale: ctx.locale,
        items,
    };
    tracing::debug!(
        units = snapshot.units().len(),
        visible = page.visible_count(),
        fallbacks = page.fallbacks().len(),
        "page rendered"
    );
    page
}

#[cfg(test)]
#[path = "../../tests/unit/session/page.rs"]
mod tests;
