// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex type for the corners of the tetrahedron.
//!
//! The core only needs vertex identity (0..4). Actual 3D coordinates belong
//! to whatever renders the solid.

use crate::error::{Result, TetraError};
use crate::geometry::constants::NVERTICES;
use std::fmt;

/// A vertex of the tetrahedron in the range 0..NVERTICES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(u8);

impl Vertex {
    /// Create a new vertex, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NVERTICES`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NVERTICES, "Vertex out of range");
        Self(value)
    }

    /// Try to create a new vertex, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NVERTICES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the vertex as a usize (for array indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all vertices in ascending order.
    pub fn all() -> impl Iterator<Item = Vertex> {
        (0..NVERTICES as u8).map(Vertex)
    }
}

impl TryFrom<u32> for Vertex {
    type Error = TetraError;

    fn try_from(value: u32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Vertex::try_new)
            .ok_or(TetraError::VertexOutOfRange { value })
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
