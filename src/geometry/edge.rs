// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edges of the tetrahedron.
//!
//! An edge is an unordered pair of distinct vertices. The 6 edges have a
//! fixed index in lexicographic order of their (low, high) endpoints:
//!
//! | index | endpoints |
//! |-------|-----------|
//! | 0     | (0, 1)    |
//! | 1     | (0, 2)    |
//! | 2     | (0, 3)    |
//! | 3     | (1, 2)    |
//! | 4     | (1, 3)    |
//! | 5     | (2, 3)    |
//!
//! Bit `i` of an edge mask refers to edge `i` of this table, so the table is
//! part of every mask's meaning and never changes.

use crate::error::{Result, TetraError};
use crate::geometry::constants::{NEDGES, NVERTICES};
use crate::geometry::Vertex;
use std::fmt;

/// Endpoints of each edge, indexed by edge index. Each pair is (low, high).
pub const EDGE_ENDPOINTS: [(u8, u8); NEDGES] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Inverse of [`EDGE_ENDPOINTS`]: `EDGE_INDEX[a][b]` is the edge joining a and b,
/// or `u8::MAX` on the diagonal.
const EDGE_INDEX: [[u8; NVERTICES]; NVERTICES] = {
    let mut table = [[u8::MAX; NVERTICES]; NVERTICES];
    let mut i = 0;
    while i < NEDGES {
        let (a, b) = EDGE_ENDPOINTS[i];
        table[a as usize][b as usize] = i as u8;
        table[b as usize][a as usize] = i as u8;
        i += 1;
    }
    table
};

/// An edge of the tetrahedron, identified by its index 0..NEDGES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(u8);

impl Edge {
    /// Create a new edge from its index, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NEDGES`.
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < NEDGES, "Edge out of range");
        Self(index)
    }

    /// Try to create a new edge, returning None if out of range.
    pub fn try_new(index: u8) -> Option<Self> {
        if (index as usize) < NEDGES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The edge joining two vertices, in either order.
    ///
    /// Returns None when `a == b`.
    pub fn between(a: Vertex, b: Vertex) -> Option<Self> {
        let index = EDGE_INDEX[a.as_usize()][b.as_usize()];
        (index != u8::MAX).then_some(Self(index))
    }

    /// Get the edge index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Get the edge index as a usize (for array and bit indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The two endpoints as (low, high).
    pub const fn endpoints(self) -> (Vertex, Vertex) {
        let (a, b) = EDGE_ENDPOINTS[self.0 as usize];
        (Vertex::new(a), Vertex::new(b))
    }

    /// Does this edge touch the given vertex?
    pub fn is_incident_to(self, v: Vertex) -> bool {
        let (a, b) = self.endpoints();
        a == v || b == v
    }

    /// Iterate over all edges in index order.
    pub fn all() -> impl Iterator<Item = Edge> {
        (0..NEDGES as u8).map(Edge)
    }
}

impl TryFrom<u32> for Edge {
    type Error = TetraError;

    fn try_from(value: u32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Edge::try_new)
            .ok_or(TetraError::EdgeOutOfRange { value })
    }
}

impl fmt::Display for Edge {
    /// Format an edge as its two endpoint digits, e.g. "03".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "{}{}", a, b)
    }
}

/// Endpoints of edge `i` as raw vertex indices.
///
/// # Panics
///
/// Panics if `i >= NEDGES`.
pub fn edge_endpoints(i: usize) -> (u8, u8) {
    EDGE_ENDPOINTS[i]
}

/// Index of the edge joining vertices `a` and `b`, in either order.
///
/// Returns None when the pair is not one of the 6 edges (equal vertices or
/// a vertex outside 0..4).
pub fn edge_index(a: u8, b: u8) -> Option<usize> {
    let a = Vertex::try_new(a)?;
    let b = Vertex::try_new(b)?;
    Edge::between(a, b).map(Edge::as_usize)
}
