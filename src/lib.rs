// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Classification and enumeration of incomplete tetrahedra.
//!
//! An incomplete tetrahedron is a non-empty, non-complete subset of the 6
//! edges of a tetrahedron (the complete graph K4). This crate enumerates the
//! 62 such subsets, classifies each by connectivity, face completeness and
//! vertex degrees, and identifies subsets that differ only by a rotation of
//! the solid.
//!
//! # Architecture
//!
//! Three layers, each depending only on the ones before it:
//!
//! ## Geometry (immutable)
//!
//! The fixed skeleton: 4 vertices, 6 edges in a fixed index order, 4 faces,
//! and per-vertex adjacency. An edge subset is an [`EdgeSet`], a 6-bit mask
//! in which bit i stands for edge i.
//!
//! ## Symmetry (immutable, built once)
//!
//! The 12 rotations of the tetrahedron are the even permutations of its
//! vertices (the alternating group A4). Each induces a permutation of the
//! edge indices, which acts on masks by remapping bits. The canonical form
//! of a mask is the smallest mask in its orbit.
//!
//! ## Classify / Enumerate (pure)
//!
//! Per-mask predicates, the [`ClassifiedSubset`] record, and [`generate`],
//! the single entry point for a presentation layer: a filter mode plus a
//! canonical-only flag in, an ordered list of records out.
//!
//! # Shared state
//!
//! The skeleton and the rotation group are computed on first use and held in
//! process-wide `OnceLock`s. They are never mutated, so every function in
//! the crate can be called from any thread.
//!
//! # Example
//!
//! ```
//! use incomplete_tetrahedra::{generate, FilterMode};
//!
//! for shape in generate(FilterMode::ConnectedNoFace, true) {
//!     println!("{:2} {} x{}", shape.mask.bits(), shape.label, shape.orbit_size);
//! }
//! ```

pub mod classify;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod symmetry;

// Re-export commonly used types
pub use classify::{ClassifiedSubset, Label};
pub use enumerate::{generate, generate_named, EnumerationRequest, Enumerator, FilterMode};
pub use error::{Result, TetraError};
pub use geometry::{Edge, EdgeSet, Vertex};
pub use symmetry::RotationGroup;
