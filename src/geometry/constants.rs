// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the tetrahedron skeleton.
//!
//! The tetrahedron's edge graph is the complete graph K4: 4 vertices, 6 edges
//! and 4 triangular faces. An edge subset is a 6-bit mask, so there are
//! exactly 64 of them, of which the empty and the complete one are never
//! enumerated.

/// Number of vertices of the tetrahedron.
pub const NVERTICES: usize = 4;

/// Number of edges of the tetrahedron (C(4,2)).
pub const NEDGES: usize = choose(NVERTICES, 2);

/// Number of triangular faces (one per omitted vertex).
pub const NFACES: usize = choose(NVERTICES, 3);

/// Number of distinct edge subsets (2^NEDGES).
pub const NSUBSETS: usize = 1 << NEDGES;

/// Mask with every edge present (the complete graph K4).
pub const FULL_MASK: u8 = (NSUBSETS - 1) as u8;

/// Number of permutations of the 4 vertices (4!).
pub const NVERTEX_PERMUTATIONS: usize = factorial(NVERTICES);

/// Order of the rotation group of the tetrahedron.
///
/// Rotations are exactly the even vertex permutations, so this is 4!/2 = 12,
/// the order of the alternating group A4.
pub const ROTATION_GROUP_ORDER: usize = NVERTEX_PERMUTATIONS / 2;

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute binomial coefficient (n choose k) at compile time.
const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

// Edge masks are stored in a u8.
const _: () = assert!(NEDGES <= 8, "edge masks must fit in a u8");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(3), 6);
        assert_eq!(factorial(4), 24);
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(4, 0), 1);
        assert_eq!(choose(4, 2), 6);
        assert_eq!(choose(4, 3), 4);
        assert_eq!(choose(3, 4), 0);
    }

    #[test]
    fn test_skeleton_counts() {
        assert_eq!(NEDGES, 6);
        assert_eq!(NFACES, 4);
        assert_eq!(NSUBSETS, 64);
        assert_eq!(FULL_MASK, 63);
    }

    #[test]
    fn test_group_order() {
        assert_eq!(NVERTEX_PERMUTATIONS, 24);
        assert_eq!(ROTATION_GROUP_ORDER, 12);
    }
}
