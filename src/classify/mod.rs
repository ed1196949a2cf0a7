// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-mask graph properties and the classified-subset record.
//!
//! Every function here is a pure function of one [`EdgeSet`]. The record
//! [`ClassifiedSubset`] bundles all of them, plus the orbit data from
//! [`crate::symmetry`], for the layer that draws and arranges the subsets.
//!
//! # Examples
//!
//! ```
//! use incomplete_tetrahedra::classify::{has_complete_face, is_connected, ClassifiedSubset};
//! use incomplete_tetrahedra::geometry::EdgeSet;
//!
//! // Edges (0,1) and (2,3) share no vertex
//! let pair = EdgeSet::from_pairs(&[(0, 1), (2, 3)]).unwrap();
//! assert!(!is_connected(pair));
//!
//! // Edges (0,1), (0,2), (1,2) close the face opposite vertex 3
//! let face = EdgeSet::from_pairs(&[(0, 1), (0, 2), (1, 2)]).unwrap();
//! assert!(has_complete_face(face));
//!
//! let record = ClassifiedSubset::classify(0, face);
//! assert_eq!(record.label.to_string(), "Triangle (face)");
//! assert_eq!(record.orbit_size, 4);
//! ```

pub mod label;

pub use label::Label;

use crate::geometry::constants::NVERTICES;
use crate::geometry::{EdgeSet, Face, Skeleton, Vertex};
use crate::symmetry::RotationGroup;
use serde::Serialize;
use std::collections::VecDeque;

/// Number of edges present.
pub fn edge_count(mask: EdgeSet) -> usize {
    mask.len()
}

/// Is the subgraph formed by `mask` connected on the vertices it touches?
///
/// Vertices with no present edge are ignored. The empty mask touches no
/// vertex and is not connected.
pub fn is_connected(mask: EdgeSet) -> bool {
    let touched = mask.touched_vertices();
    if touched == 0 {
        return false;
    }

    let skeleton = Skeleton::get();
    let start = Vertex::new(touched.trailing_zeros() as u8);
    let mut reached = 1u8 << start.value();
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        for &(neighbor, edge) in skeleton.adjacency(v) {
            let bit = 1u8 << neighbor.value();
            if mask.contains(edge) && reached & bit == 0 {
                reached |= bit;
                queue.push_back(neighbor);
            }
        }
    }
    reached == touched
}

/// The faces whose three edges are all present, ordered by omitted vertex.
pub fn complete_faces(mask: EdgeSet) -> Vec<Face> {
    Skeleton::get()
        .faces()
        .iter()
        .filter(|face| face.is_complete_in(mask))
        .copied()
        .collect()
}

/// Does `mask` contain all three edges of at least one face?
pub fn has_complete_face(mask: EdgeSet) -> bool {
    Skeleton::get().faces().iter().any(|face| face.is_complete_in(mask))
}

/// Degree of each vertex, sorted descending.
///
/// The result is a multiset: it does not say which vertex has which degree.
pub fn vertex_degrees(mask: EdgeSet) -> [u8; NVERTICES] {
    let mut degrees = [0u8; NVERTICES];
    for edge in mask.iter() {
        let (a, b) = edge.endpoints();
        degrees[a.as_usize()] += 1;
        degrees[b.as_usize()] += 1;
    }
    degrees.sort_unstable_by(|x, y| y.cmp(x));
    degrees
}

/// Everything known about one edge subset.
///
/// Records are produced fresh by each enumeration and are not shared
/// between calls. `idx` is the record's position in the sequence it came
/// from and means nothing outside that sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSubset {
    /// Position in the enumeration that produced this record.
    pub idx: usize,

    /// The subset itself.
    pub mask: EdgeSet,

    /// Smallest mask in the rotation orbit of `mask`.
    ///
    /// Stable across calls, so it can key anything attached to a shape
    /// (ratings, favourites) outside this crate.
    pub canonical_mask: EdgeSet,

    /// Number of distinct masks in the orbit; divides 12.
    pub orbit_size: usize,

    pub edge_count: usize,

    /// Vertex degrees, descending. Sums to `2 * edge_count`.
    pub degrees: [u8; NVERTICES],

    pub is_connected: bool,

    pub has_complete_face: bool,

    pub label: Label,
}

impl ClassifiedSubset {
    /// Classify `mask`, recording `idx` as its position in the caller's sequence.
    pub fn classify(idx: usize, mask: EdgeSet) -> Self {
        let group = RotationGroup::get();
        let edge_count = edge_count(mask);
        let degrees = vertex_degrees(mask);
        let has_complete_face = has_complete_face(mask);

        Self {
            idx,
            mask,
            canonical_mask: group.canonical_form(mask),
            orbit_size: group.orbit_size(mask),
            edge_count,
            degrees,
            is_connected: is_connected(mask),
            has_complete_face,
            label: Label::for_shape(edge_count, degrees, has_complete_face),
        }
    }
}
