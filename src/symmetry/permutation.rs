// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex permutations and the edge permutations they induce.
//!
//! A permutation of the 4 vertices moves every edge (a, b) to the edge
//! (p(a), p(b)). Recording where each edge index goes gives a permutation of
//! the 6 edge indices, which acts on edge masks by remapping bits.

use crate::geometry::constants::{NEDGES, NVERTEX_PERMUTATIONS, NVERTICES};
use crate::geometry::{Edge, EdgeSet, Vertex};
use std::fmt;

/// A bijection on the vertices {0,1,2,3}: vertex `i` maps to `self.0[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexPermutation([u8; NVERTICES]);

impl VertexPermutation {
    /// The identity permutation.
    pub const IDENTITY: VertexPermutation = VertexPermutation([0, 1, 2, 3]);

    /// Create a permutation from its image array.
    ///
    /// # Panics
    ///
    /// Panics if `images` is not a permutation of 0..4.
    pub fn new(images: [u8; NVERTICES]) -> Self {
        let mut seen = 0u8;
        for &v in &images {
            assert!((v as usize) < NVERTICES, "Vertex out of range: {}", v);
            seen |= 1 << v;
        }
        assert_eq!(seen, 0b1111, "Not a permutation: {:?}", images);
        Self(images)
    }

    /// All 4! permutations, in lexicographic order of their image arrays.
    pub fn all() -> Vec<VertexPermutation> {
        fn extend(prefix: &mut Vec<u8>, remaining: &mut Vec<u8>, out: &mut Vec<VertexPermutation>) {
            if remaining.is_empty() {
                let mut images = [0u8; NVERTICES];
                images.copy_from_slice(prefix.as_slice());
                out.push(VertexPermutation(images));
                return;
            }
            for i in 0..remaining.len() {
                let v = remaining.remove(i);
                prefix.push(v);
                extend(prefix, remaining, out);
                prefix.pop();
                remaining.insert(i, v);
            }
        }

        let mut out = Vec::with_capacity(NVERTEX_PERMUTATIONS);
        let mut remaining: Vec<u8> = (0..NVERTICES as u8).collect();
        extend(&mut Vec::with_capacity(NVERTICES), &mut remaining, &mut out);
        out
    }

    /// Number of pairs i < j with p(i) > p(j).
    pub fn inversions(&self) -> usize {
        let p = &self.0;
        let mut count = 0;
        for i in 0..NVERTICES {
            for j in (i + 1)..NVERTICES {
                if p[i] > p[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// A permutation is even iff its inversion count is even.
    pub fn is_even(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Image of a vertex.
    pub fn apply(&self, v: Vertex) -> Vertex {
        Vertex::new(self.0[v.as_usize()])
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &VertexPermutation) -> VertexPermutation {
        let mut images = [0u8; NVERTICES];
        for (i, image) in images.iter_mut().enumerate() {
            *image = self.0[other.0[i] as usize];
        }
        VertexPermutation(images)
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> VertexPermutation {
        let mut images = [0u8; NVERTICES];
        for (i, &v) in self.0.iter().enumerate() {
            images[v as usize] = i as u8;
        }
        VertexPermutation(images)
    }

    /// The image array.
    pub fn images(&self) -> [u8; NVERTICES] {
        self.0
    }
}

/// A bijection on the edge indices 0..6: edge `i` maps to edge `self.0[i]`.
///
/// Only permutations induced by vertex permutations are meaningful here,
/// which is why there is no public constructor from a raw array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgePermutation([u8; NEDGES]);

impl EdgePermutation {
    /// The identity permutation.
    pub const IDENTITY: EdgePermutation = EdgePermutation([0, 1, 2, 3, 4, 5]);

    /// The edge permutation induced by moving vertices with `p`.
    ///
    /// Each edge (a, b) maps to the edge joining p(a) and p(b); `Edge::between`
    /// handles re-sorting the image pair into (low, high).
    pub fn induced_by(p: &VertexPermutation) -> Self {
        let mut images = [0u8; NEDGES];
        for edge in Edge::all() {
            let (a, b) = edge.endpoints();
            let image = Edge::between(p.apply(a), p.apply(b))
                .expect("a bijection maps distinct vertices to distinct vertices");
            images[edge.as_usize()] = image.index();
        }
        EdgePermutation(images)
    }

    /// Image of an edge.
    pub fn apply_edge(&self, edge: Edge) -> Edge {
        Edge::new(self.0[edge.as_usize()])
    }

    /// Remap the bits of `mask`: bit i set in the input sets bit perm[i] in the output.
    pub fn apply(&self, mask: EdgeSet) -> EdgeSet {
        let mut out = EdgeSet::empty();
        for edge in mask.iter() {
            out.insert(self.apply_edge(edge));
        }
        out
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &EdgePermutation) -> EdgePermutation {
        let mut images = [0u8; NEDGES];
        for (i, image) in images.iter_mut().enumerate() {
            *image = self.0[other.0[i] as usize];
        }
        EdgePermutation(images)
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> EdgePermutation {
        let mut images = [0u8; NEDGES];
        for (i, &e) in self.0.iter().enumerate() {
            images[e as usize] = i as u8;
        }
        EdgePermutation(images)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Disjoint cycle decomposition, fixed points included as 1-cycles.
    ///
    /// Cycles are listed by their smallest edge, each starting from it.
    pub fn cycles(&self) -> Vec<Vec<Edge>> {
        let mut seen = [false; NEDGES];
        let mut cycles = Vec::new();
        for start in 0..NEDGES {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                cycle.push(Edge::new(i as u8));
                i = self.0[i] as usize;
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// The image array.
    pub fn images(&self) -> [u8; NEDGES] {
        self.0
    }
}

impl fmt::Display for EdgePermutation {
    /// Cycle notation over edge names, omitting fixed points, e.g. "(01 02 03)(12 23 13)".
    /// The identity is "()".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "()");
        }
        for cycle in self.cycles().iter().filter(|c| c.len() > 1) {
            write!(f, "(")?;
            for (i, edge) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", edge)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
