// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for classification and enumeration.
//!
//! The domain is closed and finite, so there is little that can go wrong at
//! runtime. Typed constructors (`Vertex::new`, `Edge::new`, `EdgeSet::new`)
//! panic on out-of-range input. The fallible `try_*` conversions and the
//! string-keyed entry points return [`TetraError`] instead.

use thiserror::Error;

/// Errors raised at the boundary where untyped values enter the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TetraError {
    /// Enumeration mode name is not one of `all`, `connected`, `connected_noface`.
    #[error("unknown enumeration mode {mode:?} (expected all, connected or connected_noface)")]
    InvalidMode { mode: String },

    /// Edge-subset mask uses bits beyond the 6 edges.
    #[error("edge mask {value} out of range (expected 0..=63)")]
    MaskOutOfRange { value: u32 },

    /// Vertex index is not in 0..4.
    #[error("vertex {value} out of range (expected 0..4)")]
    VertexOutOfRange { value: u32 },

    /// Edge index is not in 0..6.
    #[error("edge {value} out of range (expected 0..6)")]
    EdgeOutOfRange { value: u32 },
}

pub type Result<T> = std::result::Result<T, TetraError>;
