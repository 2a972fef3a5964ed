//! Property tests for treatment grouping: coverage, exclusion, dedup,
//! ordering and idempotence.

use care_engine::{group_by_treatment, FurnitureItem, Resolution, ResolvedTreatment};
use proptest::prelude::*;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Furniture drawn from a small vocabulary so materials and types repeat.
fn arb_item() -> impl Strategy<Value = FurnitureItem> {
    (
        prop_oneof![Just("Sofa"), Just("Chair"), Just("Stool"), Just("Ottoman"), Just("Desk")],
        prop_oneof![
            Just(""),
            Just("VendorA"),
            Just("VendorB"),
            Just("VendorC"),
            Just("VendorD"),
            Just("Unknown"),
        ],
    )
        .prop_map(|(furniture_type, material)| {
            FurnitureItem::new(furniture_type).with_material(material)
        })
}

/// Resolution covering a random subset of the vendors.
fn arb_resolution() -> impl Strategy<Value = Resolution> {
    prop::collection::vec(
        (
            prop_oneof![Just("VendorA"), Just("VendorB"), Just("VendorC"), Just("VendorD")],
            prop_oneof![
                Just(None),
                Just(Some("Leather Care")),
                Just(Some("Fabric Care")),
                Just(Some("Wood Care")),
            ],
        ),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(material, kind)| {
                (
                    material,
                    kind.map(|kind| ResolvedTreatment::new(kind, Some("https://example.com"))),
                )
            })
            .collect::<Resolution>()
    })
}

proptest! {
    #[test]
    fn grouping_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..20),
        resolution in arb_resolution(),
    ) {
        prop_assert_eq!(
            group_by_treatment(&items, &resolution),
            group_by_treatment(&items, &resolution)
        );
    }

    #[test]
    fn every_material_item_is_counted_exactly_once(
        items in prop::collection::vec(arb_item(), 0..20),
        resolution in arb_resolution(),
    ) {
        let groups = group_by_treatment(&items, &resolution);
        let with_material = items.iter().filter(|i| i.material_identifier().is_some()).count();
        let grouped: usize = groups.iter().map(|g| g.furniture_types.len()).sum();
        prop_assert_eq!(grouped, with_material);

        for item in items.iter() {
            let Some(material) = item.material_identifier() else { continue };
            let owners = groups
                .iter()
                .filter(|g| g.contributing_materials.contains(material))
                .count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn items_without_material_are_dropped(
        items in prop::collection::vec(arb_item(), 0..20),
        resolution in arb_resolution(),
    ) {
        let only_bare: Vec<FurnitureItem> = items
            .into_iter()
            .filter(|i| i.material_identifier().is_none())
            .collect();
        prop_assert!(group_by_treatment(&only_bare, &resolution).is_empty());
    }

    #[test]
    fn group_keys_are_unique_and_in_first_seen_order(
        items in prop::collection::vec(arb_item(), 0..20),
        resolution in arb_resolution(),
    ) {
        let groups = group_by_treatment(&items, &resolution);

        let keys: Vec<_> = groups.iter().map(|g| g.key()).collect();
        let distinct: HashSet<_> = keys.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), keys.len());

        let mut first_seen = Vec::new();
        for item in items.iter() {
            let Some(material) = item.material_identifier() else { continue };
            let key = groups
                .iter()
                .find(|g| g.contributing_materials.contains(material))
                .map(|g| g.key());
            if let Some(key) = key {
                if !first_seen.contains(&key) {
                    first_seen.push(key);
                }
            }
        }
        prop_assert_eq!(first_seen, keys);
    }

    #[test]
    fn unresolved_group_never_has_a_link(
        items in prop::collection::vec(arb_item(), 0..20),
        resolution in arb_resolution(),
    ) {
        for group in group_by_treatment(&items, &resolution) {
            if !group.resolved {
                prop_assert!(group.reference_link.is_none());
                prop_assert_eq!(group.treatment_kind.as_str(), "Care Instructions");
            }
        }
    }
}
