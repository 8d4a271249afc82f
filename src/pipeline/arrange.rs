use crate::content::kind::Taxonomy;
use crate::content::unit::ContentUnit;

/// One slot of the render sequence.
#[derive(Debug)]
pub enum LayoutItem<'a, K: Taxonomy> {
    Single(&'a ContentUnit<K>),
    /// A run of adjacent units of one groupable kind, rendered together.
    Group {
        kind: K,
        units: Vec<&'a ContentUnit<K>>,
    },
}

impl<'a, K: Taxonomy> LayoutItem<'a, K> {
    pub fn units(&self) -> Vec<&'a ContentUnit<K>> {
        match self {
            Self::Single(u) => vec![*u],
            Self::Group { units, .. } => units.clone(),
        }
    }
}

/// Active units sorted by `order` ascending; ties keep source order.
pub fn visible_in_order<K: Taxonomy>(units: &[ContentUnit<K>]) -> Vec<&ContentUnit<K>> {
    let mut visible: Vec<&ContentUnit<K>> = units.iter().filter(|u| u.is_active()).collect();
    // `sort_by_key` is stable.
    visible.sort_by_key(|u| u.order());
    visible
}

/// Coalesce consecutive units of the same groupable kind.
///
/// Only adjacency in the sorted sequence counts; a later unit of the same kind after any other
/// unit starts a new group. Groups of one are kept as groups so the caller can center them.
pub fn group_adjacent<'a, K: Taxonomy>(sorted: Vec<&'a ContentUnit<K>>) -> Vec<LayoutItem<'a, K>> {
    let mut out: Vec<LayoutItem<'a, K>> = Vec::with_capacity(sorted.len());
    for unit in sorted {
        let kind = match unit.kind() {
            Some(k) if unit.groupable() => k,
            _ => {
                out.push(LayoutItem::Single(unit));
                continue;
            }
        };
        match out.last_mut() {
            Some(LayoutItem::Group { kind: last, units }) if *last == kind => units.push(unit),
            _ => out.push(LayoutItem::Group {
                kind,
                units: vec![unit],
            }),
        }
    }
    out
}

/// Full ordering and filtering pass: drop inactive, stable sort, group.
pub fn arrange<K: Taxonomy>(units: &[ContentUnit<K>]) -> Vec<LayoutItem<'_, K>> {
    group_adjacent(visible_in_order(units))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/arrange.rs"]
mod tests;
