// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit counting with Burnside's lemma.
//!
//! The number of orbits of a set X under a group G is the average number of
//! points each group element fixes:
//!
//! ```text
//! |X / G| = (1 / |G|) * Σ_{g ∈ G} |{ x ∈ X : g·x = x }|
//! ```
//!
//! A mask is fixed by a rotation exactly when it is a union of that
//! rotation's edge cycles, so each rotation's fixed masks can be listed
//! directly from its cycle decomposition without touching the other masks.
//! The filter modes are rotation-invariant, which makes the qualifying masks
//! a union of orbits and the lemma applies to them as well.
//!
//! These counts are independent of [`crate::enumerate::generate`] and are
//! used to cross-check its canonical-only output.

use crate::enumerate::FilterMode;
use crate::geometry::EdgeSet;
use crate::symmetry::{EdgePermutation, RotationGroup};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Number of masks in 1..=62 fixed by `rotation` that qualify under `mode`.
pub fn fixed_masks(rotation: &EdgePermutation, mode: FilterMode) -> usize {
    let cycles: Vec<EdgeSet> = rotation
        .cycles()
        .iter()
        .map(|cycle| EdgeSet::from_edges(cycle))
        .collect();

    let mut count = 0;
    for selection in 0u32..(1 << cycles.len()) {
        let mask = cycles
            .iter()
            .enumerate()
            .filter(|&(i, _)| (selection >> i) & 1 != 0)
            .fold(EdgeSet::empty(), |acc, (_, &c)| acc.union(c));
        if FilterMode::in_range(mask) && mode.accepts(mask) {
            count += 1;
        }
    }
    count
}

/// Number of rotation orbits among the masks that qualify under `mode`.
pub fn count_orbits(mode: FilterMode) -> usize {
    let group = RotationGroup::get();
    let total: usize = group.iter().map(|r| fixed_masks(r, mode)).sum();
    debug_assert_eq!(total % group.len(), 0, "Burnside sum must divide evenly");
    log::trace!(
        "[Burnside] mode {}: {} fixed points over {} rotations",
        mode,
        total,
        group.len()
    );
    total / group.len()
}

/// Orbit counts for every filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitCounts {
    pub all: usize,
    pub connected: usize,
    pub connected_noface: usize,
}

impl OrbitCounts {
    pub fn compute() -> Self {
        let mut counts = OrbitCounts {
            all: 0,
            connected: 0,
            connected_noface: 0,
        };
        for mode in FilterMode::iter() {
            let n = count_orbits(mode);
            match mode {
                FilterMode::All => counts.all = n,
                FilterMode::Connected => counts.connected = n,
                FilterMode::ConnectedNoFace => counts.connected_noface = n,
            }
        }
        counts
    }

    /// Count for a single mode.
    pub fn get(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Connected => self.connected,
            FilterMode::ConnectedNoFace => self.connected_noface,
        }
    }
}
