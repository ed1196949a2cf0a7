// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular faces of the tetrahedron.
//!
//! Each face is the triangle on the three vertices left after omitting one,
//! so faces are identified by their omitted vertex. A face is "complete" in
//! an edge subset when all three of its edges are present.

use crate::geometry::constants::{NFACES, NVERTICES};
use crate::geometry::{Edge, EdgeSet, Vertex};
use std::fmt;

/// A triangular face, stored as its omitted vertex and its 3 edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// The vertex not on this face.
    pub omitted: Vertex,

    /// The three edges bounding this face.
    pub edges: EdgeSet,
}

impl Face {
    /// The face opposite the given vertex.
    pub fn opposite(omitted: Vertex) -> Self {
        let mut edges = EdgeSet::empty();
        for edge in Edge::all() {
            if !edge.is_incident_to(omitted) {
                edges.insert(edge);
            }
        }
        Self { omitted, edges }
    }

    /// All 4 faces, ordered by omitted vertex.
    pub fn all() -> [Face; NFACES] {
        let mut faces = [Face::opposite(Vertex::new(0)); NFACES];
        for (i, face) in faces.iter_mut().enumerate() {
            *face = Face::opposite(Vertex::new(i as u8));
        }
        faces
    }

    /// The three vertices of this face, ascending.
    pub fn vertices(&self) -> [Vertex; 3] {
        let mut out = [self.omitted; 3];
        let mut n = 0;
        for v in Vertex::all() {
            if v != self.omitted {
                out[n] = v;
                n += 1;
            }
        }
        debug_assert_eq!(n, NVERTICES - 1);
        out
    }

    /// Is this face complete (all three edges present) in `mask`?
    pub fn is_complete_in(&self, mask: EdgeSet) -> bool {
        mask.is_superset_of(self.edges)
    }
}

impl fmt::Display for Face {
    /// Format a face as its vertices, e.g. "[012]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices();
        write!(f, "[{}{}{}]", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_edges() {
        let masks: Vec<u8> = Face::all().iter().map(|f| f.edges.bits()).collect();
        // Omit 0: (1,2),(1,3),(2,3); omit 1: (0,2),(0,3),(2,3);
        // omit 2: (0,1),(0,3),(1,3); omit 3: (0,1),(0,2),(1,2)
        assert_eq!(masks, vec![0b111000, 0b100110, 0b010101, 0b001011]);
    }

    #[test]
    fn test_each_face_has_three_edges() {
        for face in Face::all() {
            assert_eq!(face.edges.len(), 3);
        }
    }

    #[test]
    fn test_each_edge_on_two_faces() {
        for edge in Edge::all() {
            let count = Face::all().iter().filter(|f| f.edges.contains(edge)).count();
            assert_eq!(count, 2, "edge {} should border two faces", edge);
        }
    }

    #[test]
    fn test_vertices_and_display() {
        let face = Face::opposite(Vertex::new(1));
        assert_eq!(face.vertices(), [Vertex::new(0), Vertex::new(2), Vertex::new(3)]);
        assert_eq!(format!("{}", face), "[023]");
    }

    #[test]
    fn test_is_complete_in() {
        let face = Face::opposite(Vertex::new(3));
        assert!(face.is_complete_in(EdgeSet::new(0b001011)));
        assert!(face.is_complete_in(EdgeSet::full()));
        assert!(!face.is_complete_in(EdgeSet::new(0b000011)));
    }
}
