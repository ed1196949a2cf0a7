// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! EdgeSet type for representing subsets of the 6 edges as bitmasks.
//!
//! An EdgeSet is the central value of the crate: bit i is set iff edge i
//! (see [`crate::geometry::edge`]) is present. Bits above 5 are always zero,
//! so every EdgeSet is a value in 0..=63.
//!
//! # Examples
//!
//! ```
//! use incomplete_tetrahedra::geometry::{Edge, EdgeSet};
//!
//! let mut set = EdgeSet::empty();
//! set.insert(Edge::new(0)); // (0,1)
//! set.insert(Edge::new(5)); // (2,3)
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.bits(), 33);
//! assert_eq!(format!("{}", set), "{01,23}");
//! ```

use crate::error::{Result, TetraError};
use crate::geometry::constants::{FULL_MASK, NEDGES};
use crate::geometry::{Edge, Vertex};
use serde::Serialize;
use std::fmt;

/// A set of edges represented as a 6-bit mask.
///
/// Serializes as the bare mask integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// Create an edge set from a raw mask, panicking if any bit above 5 is set.
    ///
    /// # Panics
    ///
    /// Panics if `bits > 63`.
    pub const fn new(bits: u8) -> Self {
        assert!(bits <= FULL_MASK, "Edge mask out of range");
        Self(bits)
    }

    /// Create an empty edge set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the edge set containing all 6 edges (K4).
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Create an edge set from a slice of edges.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut set = Self::empty();
        for &edge in edges {
            set.insert(edge);
        }
        set
    }

    /// Create an edge set from vertex pairs, in either order.
    ///
    /// Returns None if any pair is not an edge of the tetrahedron.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Option<Self> {
        let mut set = Self::empty();
        for &(a, b) in pairs {
            let edge = Edge::between(Vertex::try_new(a)?, Vertex::try_new(b)?)?;
            set.insert(edge);
        }
        Some(set)
    }

    /// Check if the set contains a specific edge.
    pub const fn contains(self, edge: Edge) -> bool {
        (self.0 >> edge.index()) & 1 != 0
    }

    /// Insert an edge into the set.
    pub fn insert(&mut self, edge: Edge) {
        self.0 |= 1 << edge.index();
    }

    /// Remove an edge from the set.
    pub fn remove(&mut self, edge: Edge) {
        self.0 &= !(1 << edge.index());
    }

    /// Get the number of edges in the set (population count).
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every edge of `other` is also in this set.
    pub const fn is_superset_of(self, other: EdgeSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// The edges in either set.
    pub const fn union(self, other: EdgeSet) -> Self {
        Self(self.0 | other.0)
    }

    /// The edges not in this set.
    pub const fn complement(self) -> Self {
        Self(!self.0 & FULL_MASK)
    }

    /// Get the underlying mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bitmask (bit v for vertex v) of the vertices touched by at least one edge.
    pub fn touched_vertices(self) -> u8 {
        self.iter().fold(0, |acc, edge| {
            let (a, b) = edge.endpoints();
            acc | (1 << a.value()) | (1 << b.value())
        })
    }

    /// Iterate over all edges in the set.
    ///
    /// Edges are yielded in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        EdgeSetIter {
            bits: self.0,
            index: 0,
        }
    }

    /// Iterate over every edge set in 0..=63, in ascending mask order.
    pub fn all() -> impl Iterator<Item = EdgeSet> {
        (0..=FULL_MASK).map(EdgeSet)
    }
}

/// Iterator over edges in an EdgeSet.
struct EdgeSetIter {
    bits: u8,
    index: u8,
}

impl Iterator for EdgeSetIter {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NEDGES as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Edge::new(idx));
            }
        }
        None
    }
}

impl TryFrom<u32> for EdgeSet {
    type Error = TetraError;

    fn try_from(value: u32) -> Result<Self> {
        if value <= FULL_MASK as u32 {
            Ok(Self(value as u8))
        } else {
            Err(TetraError::MaskOutOfRange { value })
        }
    }
}

impl From<EdgeSet> for u8 {
    fn from(set: EdgeSet) -> u8 {
        set.0
    }
}

impl From<&[Edge]> for EdgeSet {
    fn from(edges: &[Edge]) -> Self {
        Self::from_edges(edges)
    }
}

impl fmt::Display for EdgeSet {
    /// Format an edge set as "{01,02,13}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, edge) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "}}")
    }
}
