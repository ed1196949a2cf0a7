// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rotation group of the tetrahedron acting on edge masks.
//!
//! Orientation-preserving symmetries of a tetrahedron are exactly the even
//! permutations of its 4 vertices (the alternating group A4, order 12).
//! Each one induces a permutation of the 6 edges, and through that a
//! permutation of the 64 edge masks.
//!
//! Canonical forms follow the same idea as canonicality checking under a
//! dihedral group: apply every group element and compare. Here the chosen
//! representative is the numerically smallest mask in the orbit.
//!
//! # Examples
//!
//! ```
//! use incomplete_tetrahedra::geometry::EdgeSet;
//! use incomplete_tetrahedra::symmetry::RotationGroup;
//!
//! let group = RotationGroup::get();
//! assert_eq!(group.len(), 12);
//!
//! // Any single edge can be rotated onto edge (0,1)
//! assert_eq!(group.canonical_form(EdgeSet::new(0b100000)), EdgeSet::new(1));
//! assert_eq!(group.orbit_size(EdgeSet::new(0b100000)), 6);
//! ```

use crate::geometry::constants::{NSUBSETS, ROTATION_GROUP_ORDER};
use crate::geometry::EdgeSet;
use crate::symmetry::permutation::{EdgePermutation, VertexPermutation};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// The 12 rotations as edge permutations, identity first.
#[derive(Debug, Clone)]
pub struct RotationGroup {
    rotations: Vec<EdgePermutation>,
}

static ROTATION_GROUP: OnceLock<RotationGroup> = OnceLock::new();

impl RotationGroup {
    /// The shared group, built on first use.
    pub fn get() -> &'static RotationGroup {
        ROTATION_GROUP.get_or_init(RotationGroup::build)
    }

    /// Build the group from the even vertex permutations.
    ///
    /// Distinct vertex permutations of a tetrahedron always induce distinct
    /// edge permutations, but the images are deduplicated anyway before the
    /// order is checked.
    pub fn build() -> RotationGroup {
        log::debug!("[RotationGroup] Generating even vertex permutations...");
        let even: Vec<VertexPermutation> = VertexPermutation::all()
            .into_iter()
            .filter(VertexPermutation::is_even)
            .collect();

        // BTreeSet orders by image array, which puts the identity first.
        let distinct: BTreeSet<EdgePermutation> =
            even.iter().map(EdgePermutation::induced_by).collect();
        let rotations: Vec<EdgePermutation> = distinct.into_iter().collect();

        debug_assert_eq!(rotations.len(), ROTATION_GROUP_ORDER);
        debug_assert!(rotations[0].is_identity());
        log::debug!(
            "[RotationGroup] {} even vertex permutations induced {} edge permutations.",
            even.len(),
            rotations.len()
        );
        RotationGroup { rotations }
    }

    /// Number of rotations (always 12).
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Iterate over the rotations, identity first.
    pub fn iter(&self) -> impl Iterator<Item = &EdgePermutation> {
        self.rotations.iter()
    }

    /// The rotations as a slice.
    pub fn rotations(&self) -> &[EdgePermutation] {
        &self.rotations
    }

    /// Is `perm` one of the rotations?
    pub fn contains(&self, perm: &EdgePermutation) -> bool {
        self.rotations.binary_search(perm).is_ok()
    }

    /// The smallest mask reachable from `mask` by a rotation.
    pub fn canonical_form(&self, mask: EdgeSet) -> EdgeSet {
        self.rotations
            .iter()
            .map(|r| r.apply(mask))
            .min()
            .unwrap_or(mask)
    }

    /// Is `mask` the canonical representative of its orbit?
    pub fn is_canonical(&self, mask: EdgeSet) -> bool {
        self.canonical_form(mask) == mask
    }

    /// The distinct masks reachable from `mask`, ascending.
    pub fn orbit(&self, mask: EdgeSet) -> Vec<EdgeSet> {
        let orbit: BTreeSet<EdgeSet> = self.rotations.iter().map(|r| r.apply(mask)).collect();
        orbit.into_iter().collect()
    }

    /// Number of distinct masks reachable from `mask`. Always divides 12.
    pub fn orbit_size(&self, mask: EdgeSet) -> usize {
        let mut seen = [false; NSUBSETS];
        self.rotations
            .iter()
            .filter(|r| {
                let image = r.apply(mask).bits() as usize;
                !std::mem::replace(&mut seen[image], true)
            })
            .count()
    }

    /// Number of rotations fixing `mask` (orbit-stabilizer: 12 / orbit size).
    pub fn stabilizer_order(&self, mask: EdgeSet) -> usize {
        self.rotations.iter().filter(|r| r.apply(mask) == mask).count()
    }
}

/// Apply a rotation to a raw mask.
///
/// # Panics
///
/// Panics if `mask > 63`.
pub fn apply_permutation(mask: u8, perm: &EdgePermutation) -> u8 {
    perm.apply(EdgeSet::new(mask)).bits()
}

/// Canonical form of a raw mask under the shared rotation group.
///
/// # Panics
///
/// Panics if `mask > 63`.
pub fn canonical_form(mask: u8) -> u8 {
    RotationGroup::get().canonical_form(EdgeSet::new(mask)).bits()
}

/// Orbit size of a raw mask under the shared rotation group.
///
/// # Panics
///
/// Panics if `mask > 63`.
pub fn orbit_size(mask: u8) -> usize {
    RotationGroup::get().orbit_size(EdgeSet::new(mask))
}
