use crate::content::kind::Taxonomy;
use crate::content::unit::{ContentUnit, UnitBody};
use crate::foundation::core::Locale;
use crate::pipeline::arrange::LayoutItem;
use crate::render::context::RenderCtx;
use crate::render::failure::{RenderError, RenderFallback};
use crate::render::node::{Node, el};

/// A taxonomy whose every payload variant has a rendering strategy.
///
/// Implementations match exhaustively over the payload enum, so adding a kind without a strategy
/// fails to compile.
pub trait Strategy: Taxonomy {
    fn render(payload: &Self::Payload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError>;
}

/// Output of dispatching one layout slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// Unknown type tag; contributes nothing.
    Empty,
    Node(Node),
    Fallback(RenderFallback),
    /// Adjacent groupable units. A single member is laid out centered instead of gridded.
    Group {
        tag: &'static str,
        centered: bool,
        members: Vec<Rendered>,
    },
}

impl Rendered {
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(_) | Self::Fallback(_) => true,
            Self::Group { members, .. } => members.iter().any(Self::is_visible),
        }
    }

    /// Every fallback in this output, including those inside a group.
    pub fn fallbacks(&self) -> Vec<&RenderFallback> {
        match self {
            Self::Empty | Self::Node(_) => Vec::new(),
            Self::Fallback(f) => vec![f],
            Self::Group { members, .. } => members.iter().flat_map(Self::fallbacks).collect(),
        }
    }

    pub fn to_node(&self, locale: Locale) -> Option<Node> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.clone()),
            Self::Fallback(f) => Some(f.to_node(locale)),
            Self::Group {
                tag,
                centered,
                members,
            } => {
                let children: Vec<Node> = members.iter().filter_map(|m| m.to_node(locale)).collect();
                if children.is_empty() {
                    return None;
                }
                let layout = if *centered { "centered" } else { "grid" };
                Some(
                    el("div")
                        .class(format!("unit-group group-{tag} {layout}"))
                        .children(children)
                        .into(),
                )
            }
        }
    }
}

/// Render one unit.
///
/// Unknown tags yield [`Rendered::Empty`]. A payload that failed at the assembly boundary or a
/// strategy error yields a [`Rendered::Fallback`] carrying the unit's id and tag; the error
/// never leaves this function.
pub fn dispatch<K: Strategy>(unit: &ContentUnit<K>, ctx: &RenderCtx<'_>) -> Rendered {
    let result = match (unit.kind(), unit.body()) {
        (None, _) | (_, UnitBody::Unknown) => {
            tracing::debug!(
                family = K::FAMILY,
                id = %unit.id(),
                tag = unit.type_tag(),
                "unknown content type; rendering nothing"
            );
            return Rendered::Empty;
        }
        (Some(_), UnitBody::Broken(e)) => Err(e.clone()),
        (Some(kind), UnitBody::Ready(payload)) => K::render(payload, ctx).map(|body| (kind, body)),
    };

    match result {
        Ok((kind, body)) => {
            let family = K::FAMILY;
            let tag = kind.tag();
            Rendered::Node(
                el("section")
                    .class(format!("{family} {family}-{tag}"))
                    .attr("data-unit-id", unit.id().0.clone())
                    .child(body)
                    .into(),
            )
        }
        Err(e) => {
            tracing::warn!(
                family = K::FAMILY,
                id = %unit.id(),
                tag = unit.type_tag(),
                error = %e,
                "content unit rendered as fallback"
            );
            Rendered::Fallback(RenderFallback::new(unit.id(), unit.type_tag(), &e))
        }
    }
}

/// Render one layout slot produced by the ordering pipeline.
pub fn dispatch_item<K: Strategy>(item: &LayoutItem<'_, K>, ctx: &RenderCtx<'_>) -> Rendered {
    match item {
        LayoutItem::Single(unit) => dispatch(unit, ctx),
        LayoutItem::Group { kind, units } => Rendered::Group {
            tag: kind.tag(),
            centered: units.len() == 1,
            members: units.iter().map(|u| dispatch(u, ctx)).collect(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
