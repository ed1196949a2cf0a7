// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotational symmetry of the tetrahedron acting on edge subsets.
//!
//! This module provides the 12 rotations as permutations of the edge indices
//! and the orbit arithmetic built on them: applying a rotation to a mask,
//! reducing a mask to its canonical form, and measuring orbits.
//!
//! ## Module Structure
//!
//! - `permutation`: Vertex permutations, parity, and induced edge permutations
//! - `rotation`: The rotation group (A4), canonical forms and orbits
//! - `mod`: Public API and re-exports

pub mod permutation;
pub mod rotation;

// Re-export main types and functions
pub use permutation::{EdgePermutation, VertexPermutation};
pub use rotation::{apply_permutation, canonical_form, orbit_size, RotationGroup};
