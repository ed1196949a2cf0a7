// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed lookup tables for the tetrahedron skeleton.
//!
//! The skeleton is derived once from the edge table and never changes. It is
//! held in a process-wide `OnceLock`, so any number of callers can share it
//! by reference without synchronization after the first access.

use crate::geometry::constants::{NFACES, NVERTICES};
use crate::geometry::{Edge, Face, Vertex};
use std::sync::OnceLock;

/// Degree of every vertex in K4.
pub const VERTEX_DEGREE: usize = NVERTICES - 1;

/// A neighbouring vertex together with the edge that reaches it.
pub type Neighbor = (Vertex, Edge);

/// Immutable faces and adjacency of the tetrahedron.
#[derive(Debug)]
pub struct Skeleton {
    faces: [Face; NFACES],
    adjacency: [[Neighbor; VERTEX_DEGREE]; NVERTICES],
}

static SKELETON: OnceLock<Skeleton> = OnceLock::new();

impl Skeleton {
    /// The shared skeleton, built on first use.
    pub fn get() -> &'static Skeleton {
        SKELETON.get_or_init(Skeleton::build)
    }

    fn build() -> Skeleton {
        log::debug!("[Skeleton] Deriving faces and adjacency from edge table...");

        let placeholder = (Vertex::new(0), Edge::new(0));
        let mut adjacency = [[placeholder; VERTEX_DEGREE]; NVERTICES];
        let mut filled = [0usize; NVERTICES];
        for edge in Edge::all() {
            let (a, b) = edge.endpoints();
            adjacency[a.as_usize()][filled[a.as_usize()]] = (b, edge);
            filled[a.as_usize()] += 1;
            adjacency[b.as_usize()][filled[b.as_usize()]] = (a, edge);
            filled[b.as_usize()] += 1;
        }
        debug_assert!(filled.iter().all(|&n| n == VERTEX_DEGREE));

        let skeleton = Skeleton {
            faces: Face::all(),
            adjacency,
        };
        log::debug!(
            "[Skeleton] Initialization complete: {} faces, {} adjacency lists.",
            skeleton.faces.len(),
            skeleton.adjacency.len()
        );
        skeleton
    }

    /// The 4 faces, ordered by omitted vertex.
    pub fn faces(&self) -> &[Face; NFACES] {
        &self.faces
    }

    /// Neighbours of `v` with their connecting edges, in edge-index order.
    pub fn adjacency(&self, v: Vertex) -> &[Neighbor; VERTEX_DEGREE] {
        &self.adjacency[v.as_usize()]
    }
}

/// The 4 faces as sets of 3 edge indices each, one per omitted vertex.
pub fn faces_as_edge_sets() -> [[usize; 3]; NFACES] {
    let mut out = [[0usize; 3]; NFACES];
    for (slot, face) in out.iter_mut().zip(Skeleton::get().faces()) {
        for (i, edge) in face.edges.iter().enumerate() {
            slot[i] = edge.as_usize();
        }
    }
    out
}

/// Neighbours of vertex `v` as raw (neighbour, edge index) pairs.
///
/// # Panics
///
/// Panics if `v >= NVERTICES`.
pub fn adjacency(v: u8) -> Vec<(u8, usize)> {
    Skeleton::get()
        .adjacency(Vertex::new(v))
        .iter()
        .map(|&(n, e)| (n.value(), e.as_usize()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_as_edge_sets() {
        assert_eq!(
            faces_as_edge_sets(),
            [[3, 4, 5], [1, 2, 5], [0, 2, 4], [0, 1, 3]]
        );
    }

    #[test]
    fn test_adjacency_vertex_0() {
        assert_eq!(adjacency(0), vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_adjacency_vertex_3() {
        assert_eq!(adjacency(3), vec![(0, 2), (1, 4), (2, 5)]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let skeleton = Skeleton::get();
        for v in Vertex::all() {
            for &(n, e) in skeleton.adjacency(v) {
                assert!(skeleton.adjacency(n).contains(&(v, e)));
                assert_eq!(Edge::between(v, n), Some(e));
            }
        }
    }

    #[test]
    fn test_shared_instance() {
        assert!(std::ptr::eq(Skeleton::get(), Skeleton::get()));
    }
}
