// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the tetrahedron skeleton.
//!
//! This module contains type-safe representations of the fixed combinatorial
//! structure every other layer is built on:
//! - Vertex: Corners of the tetrahedron (0..4)
//! - Edge: Unordered vertex pairs in fixed index order (0..6)
//! - EdgeSet: Bitmask of edges, the value every classification works on
//! - Face: Triangles, one per omitted vertex
//! - Skeleton: Precomputed faces and adjacency

pub mod constants;
pub mod edge;
pub mod edge_set;
pub mod face;
pub mod skeleton;
pub mod vertex;

// Re-export for convenience
pub use constants::*;
pub use edge::{edge_endpoints, edge_index, Edge, EDGE_ENDPOINTS};
pub use edge_set::EdgeSet;
pub use face::Face;
pub use skeleton::{adjacency, faces_as_edge_sets, Skeleton};
pub use vertex::Vertex;
