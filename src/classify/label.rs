// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable shape names for edge subsets.
//!
//! Labels are cosmetic: nothing else in the crate reads them. They are chosen
//! from the edge count, the sorted degree sequence, and whether a face is
//! complete, using a fixed decision table. Shapes the table does not name
//! fall back to "Edges=N".

use serde::{Serialize, Serializer};
use std::fmt;

/// The named shape of an edge subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// K₂: one edge.
    SingleEdge,
    /// P₃: two edges sharing a vertex.
    TwoAdjacentEdges,
    /// 2K₂: two edges with no common vertex.
    TwoDisjointEdges,
    /// K₁,₃: three edges at one vertex.
    Star,
    /// The three edges of a face.
    Triangle,
    /// P₄: a path through all four vertices.
    Path,
    /// Any other 3-edge subset. Unreachable on K4 but kept so the table is total.
    OtherThreeEdge,
    /// C₄: four edges forming a cycle through all four vertices.
    FourCycle,
    /// A complete face plus one more edge.
    TriangleWithEdge,
    /// K4 minus one edge, which always contains two complete faces.
    K4MinusEdge,
    /// Fallback for shapes without a name.
    Edges(usize),
}

impl Label {
    /// Pick the label for a shape.
    ///
    /// `degrees` is the vertex degree multiset in descending order.
    pub fn for_shape(edge_count: usize, degrees: [u8; 4], has_complete_face: bool) -> Label {
        match edge_count {
            1 => Label::SingleEdge,
            2 if degrees == [1, 1, 1, 1] => Label::TwoDisjointEdges,
            2 => Label::TwoAdjacentEdges,
            3 if degrees == [3, 1, 1, 1] => Label::Star,
            3 if has_complete_face => Label::Triangle,
            3 if degrees == [2, 2, 1, 1] => Label::Path,
            3 => Label::OtherThreeEdge,
            4 if !has_complete_face && degrees == [2, 2, 2, 2] => Label::FourCycle,
            4 if has_complete_face => Label::TriangleWithEdge,
            5 => Label::K4MinusEdge,
            n => Label::Edges(n),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::SingleEdge => write!(f, "K₂ (single edge)"),
            Label::TwoAdjacentEdges => write!(f, "P₃ (two adjacent edges)"),
            Label::TwoDisjointEdges => write!(f, "2K₂ (two disjoint edges)"),
            Label::Star => write!(f, "K₁,₃ (star)"),
            Label::Triangle => write!(f, "Triangle (face)"),
            Label::Path => write!(f, "P₄ (3-edge path)"),
            Label::OtherThreeEdge => write!(f, "Other 3-edge"),
            Label::FourCycle => write!(f, "C₄ (4-cycle)"),
            Label::TriangleWithEdge => write!(f, "Triangle + edge"),
            Label::K4MinusEdge => write!(f, "K₄−e (contains faces)"),
            Label::Edges(n) => write!(f, "Edges={}", n),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
