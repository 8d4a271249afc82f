use super::*;
use crate::content::blocks::BlockKind;
use crate::content::unit::RawUnit;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn unit(id: &str, tag: &str, order: i64, active: bool) -> ContentUnit<BlockKind> {
    ContentUnit::from_raw(
        serde_json::from_value::<RawUnit>(json!({
            "id": id,
            "type": tag,
            "order": order,
            "isActive": active,
            "payload": {}
        }))
        .unwrap(),
    )
}

fn ids<K: Taxonomy>(units: &[&ContentUnit<K>]) -> Vec<String> {
    units.iter().map(|u| u.id().0.clone()).collect()
}

fn shape(items: &[LayoutItem<'_, BlockKind>]) -> Vec<String> {
    items
        .iter()
        .map(|i| match i {
            LayoutItem::Single(u) => u.id().0.clone(),
            LayoutItem::Group { units, .. } => format!("[{}]", ids(units).join(",")),
        })
        .collect()
}

#[test]
fn inactive_units_are_dropped_and_ties_are_stable() {
    let units = vec![
        unit("a", "text", 2, true),
        unit("b", "text", 1, true),
        unit("c", "text", 2, false),
        unit("d", "text", 1, true),
        unit("e", "text", -5, true),
    ];
    assert_eq!(ids(&visible_in_order(&units)), vec!["e", "b", "d", "a"]);
}

#[test]
fn only_adjacent_groupable_units_coalesce() {
    let units = vec![
        unit("v1", "video-profile", 1, true),
        unit("v2", "video-profile", 2, true),
        unit("t", "text", 3, true),
        unit("v3", "video-profile", 4, true),
        unit("x", "text", 5, true),
        unit("y", "text", 6, true),
    ];
    assert_eq!(
        shape(&arrange(&units)),
        vec!["[v1,v2]", "t", "[v3]", "x", "y"]
    );
}

#[test]
fn inactive_unit_between_groupables_does_not_split_them() {
    let units = vec![
        unit("v1", "video-profile", 1, true),
        unit("t", "text", 2, false),
        unit("v2", "video-profile", 3, true),
    ];
    assert_eq!(shape(&arrange(&units)), vec!["[v1,v2]"]);
}

#[test]
fn unknown_tags_stay_in_sequence_as_singles() {
    let units = vec![
        unit("u", "unsupported-x", 1, true),
        unit("v", "video-profile", 2, true),
    ];
    assert_eq!(shape(&arrange(&units)), vec!["u", "[v]"]);
}

fn arb_units() -> impl Strategy<Value = Vec<(i64, bool, bool)>> {
    prop::collection::vec((-3i64..4, any::<bool>(), any::<bool>()), 0..24)
}

fn build(rows: &[(i64, bool, bool)]) -> Vec<ContentUnit<BlockKind>> {
    rows.iter()
        .enumerate()
        .map(|(i, (order, active, video))| {
            let tag = if *video { "video-profile" } else { "text" };
            unit(&i.to_string(), tag, *order, *active)
        })
        .collect()
}

proptest! {
    #[test]
    fn inactive_never_rendered(rows in arb_units()) {
        let units = build(&rows);
        for item in arrange(&units) {
            for u in item.units() {
                prop_assert!(u.is_active());
            }
        }
    }

    #[test]
    fn order_is_ascending_and_stable(rows in arb_units()) {
        let units = build(&rows);
        let flat: Vec<(i64, usize)> = arrange(&units)
            .iter()
            .flat_map(|i| i.units())
            .map(|u| (u.order(), u.id().0.parse::<usize>().unwrap()))
            .collect();
        let mut expected = flat.clone();
        expected.sort();
        prop_assert_eq!(&flat, &expected);

        let active = rows.iter().filter(|(_, a, _)| *a).count();
        prop_assert_eq!(flat.len(), active);
    }

    #[test]
    fn arrange_is_deterministic(rows in arb_units()) {
        let units = build(&rows);
        prop_assert_eq!(shape(&arrange(&units)), shape(&arrange(&units)));
    }
}
