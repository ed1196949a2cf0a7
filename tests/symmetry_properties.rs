// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for the rotation group action on edge masks.

use incomplete_tetrahedra::classify::{edge_count, has_complete_face, is_connected, vertex_degrees};
use incomplete_tetrahedra::symmetry::{apply_permutation, canonical_form, orbit_size};
use incomplete_tetrahedra::{EdgeSet, RotationGroup};
use proptest::prelude::*;

fn any_mask() -> impl Strategy<Value = u8> {
    0u8..=63
}

fn any_rotation() -> impl Strategy<Value = usize> {
    0usize..12
}

proptest! {
    #[test]
    fn rotated_mask_stays_in_range(m in any_mask(), r in any_rotation()) {
        let rotation = &RotationGroup::get().rotations()[r];
        prop_assert!(apply_permutation(m, rotation) <= 63);
    }

    #[test]
    fn rotation_preserves_edge_count(m in any_mask(), r in any_rotation()) {
        let rotation = &RotationGroup::get().rotations()[r];
        prop_assert_eq!(apply_permutation(m, rotation).count_ones(), m.count_ones());
    }

    #[test]
    fn composition_stays_in_group(a in any_rotation(), b in any_rotation()) {
        let group = RotationGroup::get();
        let composed = group.rotations()[a].compose(&group.rotations()[b]);
        prop_assert!(group.contains(&composed));
    }

    #[test]
    fn composition_acts_as_sequential_application(m in any_mask(), a in any_rotation(), b in any_rotation()) {
        let group = RotationGroup::get();
        let (ra, rb) = (&group.rotations()[a], &group.rotations()[b]);
        prop_assert_eq!(
            apply_permutation(m, &ra.compose(rb)),
            apply_permutation(apply_permutation(m, rb), ra)
        );
    }

    #[test]
    fn canonical_form_is_idempotent(m in any_mask()) {
        let c = canonical_form(m);
        prop_assert_eq!(canonical_form(c), c);
        prop_assert!(c <= m);
    }

    #[test]
    fn canonical_form_is_rotation_invariant(m in any_mask(), r in any_rotation()) {
        let rotation = &RotationGroup::get().rotations()[r];
        prop_assert_eq!(canonical_form(apply_permutation(m, rotation)), canonical_form(m));
    }

    #[test]
    fn orbit_size_divides_group_order(m in any_mask()) {
        prop_assert_eq!(12 % orbit_size(m), 0);
    }

    #[test]
    fn orbit_size_is_rotation_invariant(m in any_mask(), r in any_rotation()) {
        let rotation = &RotationGroup::get().rotations()[r];
        prop_assert_eq!(orbit_size(apply_permutation(m, rotation)), orbit_size(m));
    }

    #[test]
    fn classification_is_rotation_invariant(m in any_mask(), r in any_rotation()) {
        let rotation = &RotationGroup::get().rotations()[r];
        let mask = EdgeSet::new(m);
        let rotated = rotation.apply(mask);
        prop_assert_eq!(is_connected(rotated), is_connected(mask));
        prop_assert_eq!(has_complete_face(rotated), has_complete_face(mask));
        prop_assert_eq!(vertex_degrees(rotated), vertex_degrees(mask));
        prop_assert_eq!(edge_count(rotated), edge_count(mask));
    }

    #[test]
    fn out_of_range_masks_are_rejected(value in 64u32..=u32::MAX) {
        prop_assert!(EdgeSet::try_from(value).is_err());
    }
}

#[test]
fn identity_is_in_group() {
    assert!(RotationGroup::get().iter().any(|r| r.is_identity()));
}

#[test]
fn degenerate_orbits() {
    assert_eq!(orbit_size(0), 1);
    assert_eq!(orbit_size(63), 1);
    assert_eq!(canonical_form(0), 0);
    assert_eq!(canonical_form(63), 63);
}
